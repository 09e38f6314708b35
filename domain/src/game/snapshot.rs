use serde::Serialize;

/// Everything the display needs for the current level.
///
/// `next_*` are `None` on the final level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelSnapshot {
    pub level: usize,
    pub minute: u8,
    pub second: u8,
    pub big_blind: u64,
    pub small_blind: u64,
    pub next_big_blind: Option<u64>,
    pub next_small_blind: Option<u64>,
}
