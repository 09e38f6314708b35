use super::PokerConfig;

/// Value kind of an editable configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Count,
    Chips,
    Index,
    Factor,
    Period,
}

impl FieldKind {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Count | FieldKind::Index => "whole number",
            FieldKind::Chips => "chip amount",
            FieldKind::Factor => "decimal number",
            FieldKind::Period => "duration (M:S or M)",
        }
    }
}

/// The editable fields of a [`PokerConfig`], in form order.
///
/// `BIG_BLIND_VALUES` is not listed: it is regenerated from the other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    LevelCount,
    LinearBbStep,
    SwitchLevelIndex,
    ScalingFactor,
    ChipIncrement,
    LevelPeriod,
}

impl ConfigField {
    pub const ALL: [ConfigField; 6] = [
        ConfigField::LevelCount,
        ConfigField::LinearBbStep,
        ConfigField::SwitchLevelIndex,
        ConfigField::ScalingFactor,
        ConfigField::ChipIncrement,
        ConfigField::LevelPeriod,
    ];

    /// Persisted field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConfigField::LevelCount => "LVL_N",
            ConfigField::LinearBbStep => "LINEAR_BB_STEP",
            ConfigField::SwitchLevelIndex => "SWITCH_LVL_IDX",
            ConfigField::ScalingFactor => "SCALING_FACTOR",
            ConfigField::ChipIncrement => "CHIP_INCREMENT",
            ConfigField::LevelPeriod => "LEVEL_PERIOD",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::LevelCount => FieldKind::Count,
            ConfigField::LinearBbStep | ConfigField::ChipIncrement => FieldKind::Chips,
            ConfigField::SwitchLevelIndex => FieldKind::Index,
            ConfigField::ScalingFactor => FieldKind::Factor,
            ConfigField::LevelPeriod => FieldKind::Period,
        }
    }

    #[must_use]
    pub fn constraint(self) -> &'static str {
        match self {
            ConfigField::LevelCount => "2 ..= 100",
            ConfigField::LinearBbStep => "> 0",
            ConfigField::SwitchLevelIndex => "1 ..= LVL_N - 1",
            ConfigField::ScalingFactor => "> 1.0",
            ConfigField::ChipIncrement => "> 0, divides every small blind",
            ConfigField::LevelPeriod => "> 0:00, fields 0..=59",
        }
    }

    /// Current value of this field in `config`, formatted for editing.
    #[must_use]
    pub fn display(
        self,
        config: &PokerConfig,
    ) -> String {
        match self {
            ConfigField::LevelCount => config.level_count().to_string(),
            ConfigField::LinearBbStep => config.linear_bb_step().to_string(),
            ConfigField::SwitchLevelIndex => config.switch_level_index().to_string(),
            ConfigField::ScalingFactor => config.scaling_factor().to_string(),
            ConfigField::ChipIncrement => config.chip_increment().to_string(),
            ConfigField::LevelPeriod => config.level_period().to_string(),
        }
    }
}
