//! Fade-out of the previous round's symbols

use crate::tween::Tween;

/// Opacity 1 → 0 over the configured fade duration
#[derive(Debug, Clone)]
pub struct FadeOut {
    tween: Tween,
}

impl FadeOut {
    pub fn new(start_ms: f64, duration_ms: f64) -> Self {
        Self {
            tween: Tween::new(start_ms, duration_ms, 1.0, 0.0),
        }
    }

    /// Advance; returns true on the tick the fade finishes
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.tween.advance(now_ms).just_completed
    }

    pub fn opacity(&self, now_ms: f64) -> f64 {
        self.tween.value_at(now_ms)
    }

    pub fn is_complete(&self) -> bool {
        self.tween.is_completed()
    }

    pub fn end_ms(&self) -> f64 {
        self.tween.end_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_out() {
        let mut fade = FadeOut::new(1000.0, 500.0);
        assert_eq!(fade.opacity(1000.0), 1.0);
        assert!(!fade.tick(1250.0));
        assert_eq!(fade.opacity(1250.0), 0.5);
        assert!(fade.tick(1500.0));
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(2000.0), 0.0);
        assert!(!fade.tick(2000.0));
    }

    #[test]
    fn test_zero_duration_fade() {
        let mut fade = FadeOut::new(0.0, 0.0);
        assert!(fade.tick(0.0));
        assert_eq!(fade.end_ms(), 0.0);
    }
}
