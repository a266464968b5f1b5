//! Spraying suitability evaluation
//!
//! This module turns an hourly forecast series into per-hour verdicts:
//! - Thresholds: the tunable limits every rule reads
//! - Time: JST conversion, calendar-day bounds and hour windows
//! - Checks: same-day look-ahead and recent-rain look-back scans
//! - Evaluator: the per-hour rules and record assembly

pub mod checks;
pub mod evaluator;
pub mod thresholds;
pub mod time;

pub use evaluator::{SprayEvaluator, classify_condition};
pub use thresholds::{HourWindow, Thresholds};
