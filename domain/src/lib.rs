mod config;
mod duration;
mod game;
pub mod schedule;

pub use config::{ConfigError, ConfigField, FieldKind, MAX_LEVELS, PokerConfig};
pub use duration::{DurationError, LevelDuration};
pub use game::{GameState, LevelSnapshot, StateError, TickOutcome};
pub use schedule::{ScheduleCurves, ScheduleError, ScheduleParams};
