//! Big-blind schedule generation.
//!
//! A schedule is built in two phases. Levels before the switch index follow a
//! linear curve (`start * (level + 1)`), levels from the switch index on follow
//! a geometric curve seeded with the linear value at the switch index and
//! rounded to the nearest chip increment.
//!
//! The linear segment is deliberately left unrounded. Callers that need every
//! level divisible by the chip increment have to re-validate that segment.

use std::iter;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("scale factor must be a finite number greater than zero, got {0}")]
    InvalidScaleFactor(f64),

    #[error("chip increment must be greater than zero")]
    ZeroChipIncrement,

    #[error("start value must be greater than zero")]
    ZeroStartValue,

    #[error("switch level index {index} is outside 0..{level_count}")]
    SwitchOutOfRange { index: usize, level_count: usize },
}

/// Inputs of [`generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParams {
    /// Raw big blind of the first level, also the linear step.
    pub start_value: u64,
    pub level_count: usize,
    /// First level (zero-based) taken from the geometric curve.
    pub switch_level_index: usize,
    pub scale_factor: f64,
    pub chip_increment: u64,
}

impl ScheduleParams {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ScheduleError::InvalidScaleFactor(self.scale_factor));
        }
        if self.chip_increment == 0 {
            return Err(ScheduleError::ZeroChipIncrement);
        }
        if self.start_value == 0 {
            return Err(ScheduleError::ZeroStartValue);
        }
        if self.switch_level_index >= self.level_count {
            return Err(ScheduleError::SwitchOutOfRange {
                index: self.switch_level_index,
                level_count: self.level_count,
            });
        }
        Ok(())
    }
}

/// The three curves drawn by the settings chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCurves {
    /// Linear pass over every level.
    pub linear: Vec<u64>,
    /// Geometric reference pass seeded so that it meets the linear curve at
    /// the switch index. Display only.
    pub scaled: Vec<u64>,
    /// The authoritative schedule, as returned by [`generate`].
    pub combined: Vec<u64>,
}

/// Rounds `value` to a multiple of `increment`.
///
/// The lower multiple wins only when it is strictly nearer and non-zero, so
/// ties and values below one increment both round up.
#[must_use]
pub fn round_to_increment(
    value: f64,
    increment: u64,
) -> u64 {
    debug_assert!(increment > 0, "increment must be non-zero");
    let increment = increment as f64;
    let lo = (value / increment).floor() * increment;
    let hi = lo + increment;
    if value - lo < hi - value && lo > 0.0 {
        lo as u64
    } else {
        hi as u64
    }
}

/// `count` unrounded values `start * (k + 1)`.
#[must_use]
pub fn linear_phase(
    start: u64,
    count: usize,
) -> Vec<u64> {
    (0..count).map(|k| start.saturating_mul(k as u64 + 1)).collect()
}

/// `count` geometric terms starting at `first`, each rounded before the next
/// multiplication.
#[must_use]
pub fn geometric_phase(
    first: f64,
    count: usize,
    scale_factor: f64,
    chip_increment: u64,
) -> Vec<u64> {
    scaled_terms(first, scale_factor)
        .take(count)
        .map(|term| round_to_increment(term, chip_increment))
        .collect()
}

/// Divides `value` by `scale_factor` `steps` times.
#[must_use]
pub fn reverse_seed(
    value: f64,
    steps: usize,
    scale_factor: f64,
) -> f64 {
    let inverse = 1.0 / scale_factor;
    (0..steps).fold(value, |acc, _| acc * inverse)
}

fn scaled_terms(
    first: f64,
    scale_factor: f64,
) -> impl Iterator<Item = f64> {
    iter::successors(Some(first), move |term| Some(term * scale_factor))
}

/// Generates the big blind of every level.
pub fn generate(params: &ScheduleParams) -> Result<Vec<u64>, ScheduleError> {
    params.validate()?;
    let linear = linear_phase(params.start_value, params.level_count);
    Ok(assemble(params, &linear))
}

/// Generates the schedule together with the curves it is derived from.
pub fn curves(params: &ScheduleParams) -> Result<ScheduleCurves, ScheduleError> {
    params.validate()?;
    let linear = linear_phase(params.start_value, params.level_count);
    let seed = reverse_seed(
        linear[params.switch_level_index] as f64,
        params.switch_level_index,
        params.scale_factor,
    );
    let scaled = geometric_phase(seed, params.level_count, params.scale_factor, params.chip_increment);
    let combined = assemble(params, &linear);
    Ok(ScheduleCurves {
        linear,
        scaled,
        combined,
    })
}

fn assemble(
    params: &ScheduleParams,
    linear: &[u64],
) -> Vec<u64> {
    let switch = params.switch_level_index;
    let forward = geometric_phase(
        linear[switch] as f64,
        params.level_count,
        params.scale_factor,
        params.chip_increment,
    );
    (0..params.level_count)
        .map(|i| if i < switch { linear[i] } else { forward[i - switch] })
        .collect()
}
