use serde::{Deserialize, Serialize};

use super::{ConfigError, PokerConfig};
use crate::{LevelDuration, ScheduleParams};

/// On-disk shape of a [`PokerConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ConfigRecord {
    lvl_n: usize,
    linear_bb_step: u64,
    switch_lvl_idx: usize,
    scaling_factor: f64,
    chip_increment: u64,
    big_blind_values: Vec<i64>,
    level_period: LevelDuration,
}

impl TryFrom<ConfigRecord> for PokerConfig {
    type Error = ConfigError;

    fn try_from(record: ConfigRecord) -> Result<Self, Self::Error> {
        let blinds = record
            .big_blind_values
            .iter()
            .enumerate()
            .map(|(index, &value)| match u64::try_from(value) {
                Ok(bb) if bb > 0 => Ok(bb),
                _ => Err(ConfigError::NonPositiveBlind { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let params = ScheduleParams {
            start_value: record.linear_bb_step,
            level_count: record.lvl_n,
            switch_level_index: record.switch_lvl_idx,
            scale_factor: record.scaling_factor,
            chip_increment: record.chip_increment,
        };
        PokerConfig::with_blinds(params, record.level_period, blinds)
    }
}

impl From<PokerConfig> for ConfigRecord {
    fn from(config: PokerConfig) -> Self {
        Self {
            lvl_n: config.level_count(),
            linear_bb_step: config.linear_bb_step(),
            switch_lvl_idx: config.switch_level_index(),
            scaling_factor: config.scaling_factor(),
            chip_increment: config.chip_increment(),
            big_blind_values: config
                .big_blind_values()
                .iter()
                .map(|&bb| i64::try_from(bb).unwrap_or(i64::MAX))
                .collect(),
            level_period: config.level_period(),
        }
    }
}
