//! Easing curves applied to tween progress

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (constant rate)
    #[default]
    Linear,
    /// Fast start, slow end (quadratic)
    EaseOutQuad,
    /// Fast start, slower end (cubic)
    EaseOutCubic,
    /// Slow start/end, fast middle
    EaseInOutSine,
}

impl Easing {
    /// Evaluate curve at position t (0.0 - 1.0). Endpoints are exact.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
