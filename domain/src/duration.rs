use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_FIELD: u8 = 59;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("malformed duration {0:?}, expected \"M:S\" or \"M\"")]
    Malformed(String),

    #[error("{field} must be in 0..=59, got {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

/// A `minutes:seconds` countdown value, both fields in `0..=59`.
///
/// Persisted as the two element array `[minutes, seconds]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct LevelDuration {
    minutes: u8,
    seconds: u8,
}

impl LevelDuration {
    pub const ZERO: Self = Self { minutes: 0, seconds: 0 };

    pub fn new(
        minutes: u32,
        seconds: u32,
    ) -> Result<Self, DurationError> {
        Ok(Self {
            minutes: checked_field("minutes", minutes)?,
            seconds: checked_field("seconds", seconds)?,
        })
    }

    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// Counts one second down, borrowing a minute when the seconds are
    /// exhausted. Returns `false` (and leaves the value alone) at `0:00`.
    pub(crate) fn count_down(&mut self) -> bool {
        match (self.minutes, self.seconds) {
            (0, 0) => false,
            (_, 0) => {
                self.minutes -= 1;
                self.seconds = MAX_FIELD;
                true
            }
            _ => {
                self.seconds -= 1;
                true
            }
        }
    }
}

fn checked_field(
    field: &'static str,
    value: u32,
) -> Result<u8, DurationError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_FIELD)
        .ok_or(DurationError::OutOfRange { field, value })
}

impl FromStr for LevelDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DurationError::Malformed(s.to_string());
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| malformed());

        let mut parts = s.trim().split(':');
        let minutes = parse(parts.next().ok_or_else(malformed)?)?;
        let seconds = match parts.next() {
            Some(part) => parse(part)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(malformed());
        }

        Self::new(minutes, seconds)
    }
}

impl fmt::Display for LevelDuration {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl TryFrom<(u32, u32)> for LevelDuration {
    type Error = DurationError;

    fn try_from((minutes, seconds): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(minutes, seconds)
    }
}

impl From<LevelDuration> for (u32, u32) {
    fn from(duration: LevelDuration) -> Self {
        (u32::from(duration.minutes), u32::from(duration.seconds))
    }
}
