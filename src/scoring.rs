//! Scoring engine.
//!
//! - [`axis`] - Per-axis position from weighted answers
//! - [`affinity`] - Distance-based ranking against reference profiles

pub mod affinity;
pub mod axis;

pub use affinity::{compute_affinities, DEFAULT_MAX_DIFF_PER_QUESTION};
pub use axis::{compute_axis_scores, AxisScores};
