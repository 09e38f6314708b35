use std::sync::Arc;

use crate::{LevelDuration, PokerConfig};

use super::{LevelSnapshot, StateError};

/// What a call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off the countdown.
    Counted,
    /// The countdown had expired; the level went up and the countdown restarted.
    LevelAdvanced { level: usize },
    /// The countdown expired on the final level and restarted in place.
    LevelRestarted,
}

/// Level and countdown of a running tournament.
///
/// Whether the clock is running is up to the caller: a paused tournament is
/// one whose driver stops calling [`GameState::tick`].
#[derive(Clone, Debug)]
pub struct GameState {
    config: Arc<PokerConfig>,
    pub(super) level: usize,
    pub(super) remaining: LevelDuration,
}

impl GameState {
    #[must_use]
    pub fn new(config: Arc<PokerConfig>) -> Self {
        let remaining = config.level_period();
        Self {
            config,
            level: 1,
            remaining,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Arc<PokerConfig> {
        &self.config
    }

    /// Current level, 1-indexed.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn remaining(&self) -> LevelDuration {
        self.remaining
    }

    #[must_use]
    pub fn is_final_level(&self) -> bool {
        self.level >= self.config.final_level()
    }

    /// Advances the countdown by one second of game time.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining.count_down() {
            return TickOutcome::Counted;
        }

        self.restart_countdown();
        if self.is_final_level() {
            TickOutcome::LevelRestarted
        } else {
            self.level += 1;
            TickOutcome::LevelAdvanced { level: self.level }
        }
    }

    /// Moves up one level unless already on the final one. The countdown is
    /// restarted either way. Returns whether the level changed.
    pub fn next_level(&mut self) -> bool {
        let moved = !self.is_final_level();
        if moved {
            self.level += 1;
        }
        self.restart_countdown();
        moved
    }

    /// Moves down one level unless already on level 1. The countdown is
    /// restarted either way. Returns whether the level changed.
    pub fn prev_level(&mut self) -> bool {
        let moved = self.level > 1;
        if moved {
            self.level -= 1;
        }
        self.restart_countdown();
        moved
    }

    pub fn reset_level(&mut self) {
        self.level = 1;
        self.restart_countdown();
    }

    /// Swaps in a new configuration. With `reset_timer` the countdown restarts
    /// from the new level period, otherwise the time in flight is kept.
    pub fn update_config(
        &mut self,
        config: Arc<PokerConfig>,
        reset_timer: bool,
    ) {
        self.config = config;
        self.level = self.level.min(self.config.final_level()).max(1);
        if reset_timer {
            self.restart_countdown();
        }
    }

    /// Current level, countdown and blinds.
    ///
    /// Fails when the small blind of the current level is not a positive
    /// multiple of the chip increment.
    pub fn snapshot(&self) -> Result<LevelSnapshot, StateError> {
        let level = self.level;
        let chip_increment = self.config.chip_increment();
        let big_blind = self.config.big_blind(level).ok_or(StateError::MissingLevel { level })?;
        let small_blind = big_blind / 2;

        if small_blind % chip_increment != 0 {
            return Err(StateError::SmallBlindMisaligned {
                level,
                small_blind,
                chip_increment,
            });
        }
        if small_blind < chip_increment {
            return Err(StateError::SmallBlindBelowIncrement {
                level,
                small_blind,
                chip_increment,
            });
        }

        let next_big_blind = self.config.big_blind(level + 1);
        Ok(LevelSnapshot {
            level,
            minute: self.remaining.minutes(),
            second: self.remaining.seconds(),
            big_blind,
            small_blind,
            next_big_blind,
            next_small_blind: next_big_blind.map(|bb| bb / 2),
        })
    }

    fn restart_countdown(&mut self) {
        self.remaining = self.config.level_period();
    }
}
