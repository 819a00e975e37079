//! Frame clock sources

use std::time::Instant;

/// Monotonic clock reading in milliseconds
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// Wall clock, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand (tests, headless play)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: f64) -> Self {
        Self { now: now_ms }
    }

    /// Move forward by `dt_ms` (negative steps are ignored) and return the new time
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.now += dt_ms.max(0.0);
        self.now
    }

    /// Interval between frames at `fps`
    pub fn frame_interval(fps: u32) -> f64 {
        1000.0 / fps.max(1) as f64
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::starting_at(100.0);
        assert_eq!(clock.now_ms(), 100.0);
        assert_eq!(clock.advance(16.0), 116.0);
        assert_eq!(clock.advance(-50.0), 116.0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(ManualClock::frame_interval(50), 20.0);
        assert_eq!(ManualClock::frame_interval(0), 1000.0);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
