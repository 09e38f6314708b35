use thiserror::Error;

use crate::{DurationError, ScheduleError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("BIG_BLIND_VALUES is empty")]
    EmptyBlinds,

    #[error("BIG_BLIND_VALUES[{index}] must be a positive chip value, got {value}")]
    NonPositiveBlind { index: usize, value: i64 },

    #[error("BIG_BLIND_VALUES holds {actual} levels but LVL_N is {expected}")]
    BlindCountMismatch { expected: usize, actual: usize },

    #[error("BIG_BLIND_VALUES[{index}] is lower than the level before it")]
    DecreasingBlinds { index: usize },

    #[error("LEVEL_PERIOD must be longer than 0:00")]
    ZeroLevelPeriod,

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
