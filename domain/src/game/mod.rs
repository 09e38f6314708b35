mod error;
mod snapshot;
mod state;

#[cfg(test)]
mod tests;

pub use error::StateError;
pub use snapshot::LevelSnapshot;
pub use state::{GameState, TickOutcome};
