use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("level {level}: small blind {small_blind} is not a multiple of the chip increment {chip_increment}")]
    SmallBlindMisaligned {
        level: usize,
        small_blind: u64,
        chip_increment: u64,
    },

    #[error("level {level}: small blind {small_blind} is below the chip increment {chip_increment}")]
    SmallBlindBelowIncrement {
        level: usize,
        small_blind: u64,
        chip_increment: u64,
    },

    #[error("level {level} has no big blind in the schedule")]
    MissingLevel { level: usize },
}
