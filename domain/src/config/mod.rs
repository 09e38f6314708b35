mod error;
mod record;
mod schema;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schedule::{self, ScheduleParams};
use crate::LevelDuration;

pub use error::ConfigError;
pub use schema::{ConfigField, FieldKind};

use record::ConfigRecord;

/// Upper bound on `LVL_N`.
pub const MAX_LEVELS: usize = 100;

/// Tournament configuration: the schedule parameters, the level period and
/// the materialized big blind of every level.
///
/// Instances are only built through validating constructors and are never
/// mutated; editing produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRecord", into = "ConfigRecord")]
pub struct PokerConfig {
    params: ScheduleParams,
    level_period: LevelDuration,
    big_blind_values: Vec<u64>,
}

impl PokerConfig {
    /// Builds a configuration whose schedule is generated from `params`.
    ///
    /// Parameters whose generated schedule drops at the switch level are
    /// rejected with [`ConfigError::DecreasingBlinds`].
    pub fn generated(
        params: ScheduleParams,
        level_period: LevelDuration,
    ) -> Result<Self, ConfigError> {
        validate(&params, level_period)?;
        let big_blind_values = schedule::generate(&params)?;
        check_blinds(&params, &big_blind_values)?;
        Ok(Self {
            params,
            level_period,
            big_blind_values,
        })
    }

    /// Builds a configuration around an explicit schedule, e.g. one read
    /// back from disk.
    pub fn with_blinds(
        params: ScheduleParams,
        level_period: LevelDuration,
        big_blind_values: Vec<u64>,
    ) -> Result<Self, ConfigError> {
        validate(&params, level_period)?;
        check_blinds(&params, &big_blind_values)?;
        Ok(Self {
            params,
            level_period,
            big_blind_values,
        })
    }

    /// Returns a copy with `field` parsed from `raw` and the schedule
    /// regenerated. Shrinking `LVL_N` pulls `SWITCH_LVL_IDX` back into range.
    pub fn with_field(
        &self,
        field: ConfigField,
        raw: &str,
    ) -> Result<Self, ConfigError> {
        let mut params = self.params;
        let mut level_period = self.level_period;

        match field {
            ConfigField::LevelCount => {
                params.level_count = parse_field(field, raw)?;
                let last = params.level_count.saturating_sub(1).max(1);
                params.switch_level_index = params.switch_level_index.clamp(1, last);
            }
            ConfigField::LinearBbStep => params.start_value = parse_field(field, raw)?,
            ConfigField::SwitchLevelIndex => params.switch_level_index = parse_field(field, raw)?,
            ConfigField::ScalingFactor => params.scale_factor = parse_field(field, raw)?,
            ConfigField::ChipIncrement => params.chip_increment = parse_field(field, raw)?,
            ConfigField::LevelPeriod => level_period = raw.parse()?,
        }

        Self::generated(params, level_period)
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.params.level_count
    }

    #[must_use]
    pub fn linear_bb_step(&self) -> u64 {
        self.params.start_value
    }

    #[must_use]
    pub fn switch_level_index(&self) -> usize {
        self.params.switch_level_index
    }

    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        self.params.scale_factor
    }

    #[must_use]
    pub fn chip_increment(&self) -> u64 {
        self.params.chip_increment
    }

    #[must_use]
    pub fn level_period(&self) -> LevelDuration {
        self.level_period
    }

    #[must_use]
    pub fn big_blind_values(&self) -> &[u64] {
        &self.big_blind_values
    }

    #[must_use]
    pub fn schedule_params(&self) -> ScheduleParams {
        self.params
    }

    /// Big blind of the 1-indexed `level`.
    #[must_use]
    pub fn big_blind(
        &self,
        level: usize,
    ) -> Option<u64> {
        level.checked_sub(1).and_then(|i| self.big_blind_values.get(i).copied())
    }

    /// Highest reachable 1-indexed level.
    #[must_use]
    pub fn final_level(&self) -> usize {
        self.big_blind_values.len()
    }
}

fn validate(
    params: &ScheduleParams,
    level_period: LevelDuration,
) -> Result<(), ConfigError> {
    let invalid = |field: ConfigField, reason: String| ConfigError::InvalidField {
        field: field.name(),
        reason,
    };

    if !(2..=MAX_LEVELS).contains(&params.level_count) {
        return Err(invalid(
            ConfigField::LevelCount,
            format!("must be in 2..={MAX_LEVELS}, got {}", params.level_count),
        ));
    }
    if params.start_value == 0 {
        return Err(invalid(ConfigField::LinearBbStep, "must be greater than 0".to_string()));
    }
    if !(1..params.level_count).contains(&params.switch_level_index) {
        return Err(invalid(
            ConfigField::SwitchLevelIndex,
            format!(
                "must be in 1..={}, got {}",
                params.level_count - 1,
                params.switch_level_index
            ),
        ));
    }
    if !params.scale_factor.is_finite() || params.scale_factor <= 1.0 {
        return Err(invalid(
            ConfigField::ScalingFactor,
            format!("must be greater than 1.0, got {}", params.scale_factor),
        ));
    }
    if params.chip_increment == 0 {
        return Err(invalid(ConfigField::ChipIncrement, "must be greater than 0".to_string()));
    }
    if level_period.is_zero() {
        return Err(ConfigError::ZeroLevelPeriod);
    }
    Ok(())
}

fn check_blinds(
    params: &ScheduleParams,
    big_blind_values: &[u64],
) -> Result<(), ConfigError> {
    if big_blind_values.is_empty() {
        return Err(ConfigError::EmptyBlinds);
    }
    if let Some(index) = big_blind_values.iter().position(|&bb| bb == 0) {
        return Err(ConfigError::NonPositiveBlind { index, value: 0 });
    }
    if big_blind_values.len() != params.level_count {
        return Err(ConfigError::BlindCountMismatch {
            expected: params.level_count,
            actual: big_blind_values.len(),
        });
    }
    if let Some(index) = big_blind_values.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(ConfigError::DecreasingBlinds { index: index + 1 });
    }
    Ok(())
}

fn parse_field<T: FromStr>(
    field: ConfigField,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidField {
        field: field.name(),
        reason: format!("{raw:?} is not a {}", field.kind().describe()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScheduleParams {
        ScheduleParams {
            start_value: 200,
            level_count: 15,
            switch_level_index: 6,
            scale_factor: 1.2,
            chip_increment: 50,
        }
    }

    fn period() -> LevelDuration {
        LevelDuration::new(20, 0).unwrap()
    }

    #[test]
    fn test_generated_config_materializes_schedule() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        assert_eq!(config.big_blind_values().len(), 15);
        assert_eq!(config.big_blind(1), Some(200));
        assert_eq!(config.big_blind(15), Some(6000));
        assert_eq!(config.big_blind(0), None);
        assert_eq!(config.big_blind(16), None);
        assert_eq!(config.final_level(), 15);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let cases = [
            (ScheduleParams { level_count: 1, ..params() }, "LVL_N"),
            (ScheduleParams { start_value: 0, ..params() }, "LINEAR_BB_STEP"),
            (
                ScheduleParams {
                    switch_level_index: 0,
                    ..params()
                },
                "SWITCH_LVL_IDX",
            ),
            (
                ScheduleParams {
                    switch_level_index: 15,
                    ..params()
                },
                "SWITCH_LVL_IDX",
            ),
            (
                ScheduleParams {
                    scale_factor: 1.0,
                    ..params()
                },
                "SCALING_FACTOR",
            ),
            (
                ScheduleParams {
                    chip_increment: 0,
                    ..params()
                },
                "CHIP_INCREMENT",
            ),
        ];

        for (params, expected_field) in cases {
            match PokerConfig::generated(params, period()) {
                Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected {expected_field} to be rejected, got {other:?}"),
            }
        }

        assert_eq!(
            PokerConfig::generated(params(), LevelDuration::ZERO),
            Err(ConfigError::ZeroLevelPeriod)
        );
    }

    #[test]
    fn test_with_blinds_validates_schedule() {
        assert_eq!(
            PokerConfig::with_blinds(params(), period(), vec![]),
            Err(ConfigError::EmptyBlinds)
        );
        assert_eq!(
            PokerConfig::with_blinds(params(), period(), vec![100, 200]),
            Err(ConfigError::BlindCountMismatch {
                expected: 15,
                actual: 2
            })
        );

        let short = ScheduleParams {
            level_count: 3,
            switch_level_index: 1,
            ..params()
        };
        assert_eq!(
            PokerConfig::with_blinds(short, period(), vec![100, 0, 300]),
            Err(ConfigError::NonPositiveBlind { index: 1, value: 0 })
        );
        assert!(PokerConfig::with_blinds(short, period(), vec![100, 200, 300]).is_ok());
        assert!(PokerConfig::with_blinds(short, period(), vec![100, 200, 200]).is_ok());
    }

    #[test]
    fn test_with_blinds_rejects_decreasing_schedule() {
        let short = ScheduleParams {
            level_count: 3,
            switch_level_index: 1,
            ..params()
        };
        assert_eq!(
            PokerConfig::with_blinds(short, period(), vec![400, 200, 100]),
            Err(ConfigError::DecreasingBlinds { index: 1 })
        );
        assert_eq!(
            PokerConfig::with_blinds(short, period(), vec![100, 300, 200]),
            Err(ConfigError::DecreasingBlinds { index: 2 })
        );
    }

    #[test]
    fn test_generated_rejects_schedule_dropping_at_switch() {
        // linear reaches 110 at level 11, then 120 rounds down to 100
        let params = ScheduleParams {
            start_value: 10,
            level_count: 15,
            switch_level_index: 11,
            scale_factor: 1.2,
            chip_increment: 50,
        };
        assert_eq!(
            PokerConfig::generated(params, period()),
            Err(ConfigError::DecreasingBlinds { index: 11 })
        );
    }

    #[test]
    fn test_level_count_is_capped() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        assert!(matches!(
            config.with_field(ConfigField::LevelCount, "2000000000000"),
            Err(ConfigError::InvalidField { field: "LVL_N", .. })
        ));
        assert!(matches!(
            config.with_field(ConfigField::LevelCount, &(MAX_LEVELS + 1).to_string()),
            Err(ConfigError::InvalidField { field: "LVL_N", .. })
        ));
        assert!(config.with_field(ConfigField::LevelCount, "20").is_ok());
    }

    #[test]
    fn test_json_shape_round_trip() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["LVL_N"], 15);
        assert_eq!(json["LINEAR_BB_STEP"], 200);
        assert_eq!(json["SWITCH_LVL_IDX"], 6);
        assert_eq!(json["SCALING_FACTOR"], 1.2);
        assert_eq!(json["CHIP_INCREMENT"], 50);
        assert_eq!(json["LEVEL_PERIOD"], serde_json::json!([20, 0]));
        assert_eq!(json["BIG_BLIND_VALUES"].as_array().unwrap().len(), 15);

        let decoded: PokerConfig = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_json_rejects_sentinel_blinds() {
        let sentinel = serde_json::json!({
            "LVL_N": 2,
            "LINEAR_BB_STEP": 100,
            "SWITCH_LVL_IDX": 1,
            "SCALING_FACTOR": 1.5,
            "CHIP_INCREMENT": 50,
            "BIG_BLIND_VALUES": [-1, 200],
            "LEVEL_PERIOD": [10, 0]
        });
        let err = serde_json::from_value::<PokerConfig>(sentinel).unwrap_err();
        assert!(err.to_string().contains("BIG_BLIND_VALUES[0]"), "{err}");

        let scalar_sentinel = serde_json::json!({
            "LVL_N": 2,
            "LINEAR_BB_STEP": 100,
            "SWITCH_LVL_IDX": 1,
            "SCALING_FACTOR": 1.5,
            "CHIP_INCREMENT": 50,
            "BIG_BLIND_VALUES": -1,
            "LEVEL_PERIOD": [10, 0]
        });
        assert!(serde_json::from_value::<PokerConfig>(scalar_sentinel).is_err());
    }

    #[test]
    fn test_with_field_regenerates_schedule() {
        let config = PokerConfig::generated(params(), period()).unwrap();

        let faster = config.with_field(ConfigField::ScalingFactor, "1.5").unwrap();
        assert_eq!(faster.scaling_factor(), 1.5);
        assert_eq!(&faster.big_blind_values()[..7], &config.big_blind_values()[..7]);
        assert_eq!(faster.big_blind_values()[7], 2100);

        let shorter = config.with_field(ConfigField::LevelPeriod, "12:30").unwrap();
        assert_eq!(shorter.level_period(), LevelDuration::new(12, 30).unwrap());
        assert_eq!(shorter.big_blind_values(), config.big_blind_values());
    }

    #[test]
    fn test_with_field_clamps_switch_when_shrinking() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        let small = config.with_field(ConfigField::LevelCount, "4").unwrap();
        assert_eq!(small.level_count(), 4);
        assert_eq!(small.switch_level_index(), 3);
        assert_eq!(small.big_blind_values().len(), 4);
    }

    #[test]
    fn test_with_field_reports_bad_text() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        assert!(matches!(
            config.with_field(ConfigField::ChipIncrement, "fifty"),
            Err(ConfigError::InvalidField {
                field: "CHIP_INCREMENT",
                ..
            })
        ));
        assert!(matches!(
            config.with_field(ConfigField::LevelPeriod, "1:75"),
            Err(ConfigError::Duration(_))
        ));
    }

    #[test]
    fn test_schema_lists_every_editable_field() {
        let config = PokerConfig::generated(params(), period()).unwrap();
        let names: Vec<_> = ConfigField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["LVL_N", "LINEAR_BB_STEP", "SWITCH_LVL_IDX", "SCALING_FACTOR", "CHIP_INCREMENT", "LEVEL_PERIOD"]
        );
        assert_eq!(ConfigField::LevelPeriod.display(&config), "20:00");
        assert!(ConfigField::LevelCount.constraint().ends_with(&MAX_LEVELS.to_string()));
        assert_eq!(ConfigField::ScalingFactor.display(&config), "1.2");
    }
}
