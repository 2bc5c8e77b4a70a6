//! Score value object.
//!
//! Scores are **value objects**: immutable, compared by value, no identity.
//! Every category sub-score and the weighted total live on the same 0–100
//! scale, so the invariant is enforced once, here.

use serde::{Deserialize, Serialize};

/// A score on the 0–100 scale.
///
/// Construction clamps into range, so a `Score` is always in `[0, 100]` and
/// downstream consumers (weighting, rendering) never re-check.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const MIN: Score = Score(0.0);
    pub const MAX: Score = Score(100.0);

    /// Create a score, clamping into `[0, 100]`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Contribution of this score under a top-level weight (e.g. `0.4`).
    pub fn weighted(&self, weight: f64) -> f64 {
        self.0 * weight
    }
}

impl From<Score> for f64 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
