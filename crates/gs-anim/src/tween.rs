//! Scalar tween, the unit every animation is built from

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Lifecycle of an animation task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TaskState {
    /// Start time not reached yet
    #[default]
    Scheduled = 0,
    /// Interpolating
    Running = 1,
    /// Reached its end value; stays here
    Completed = 2,
}

impl TaskState {
    #[inline]
    pub fn is_finished(&self) -> bool {
        *self == TaskState::Completed
    }
}

/// Result of advancing a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    pub value: f64,
    pub progress: f64,
    /// True on exactly one step: the one that reached progress 1
    pub just_completed: bool,
}

/// Interpolates `from → to` over `[start_ms, start_ms + duration_ms]`
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start_ms: f64,
    duration_ms: f64,
    from: f64,
    to: f64,
    easing: Easing,
    state: TaskState,
}

impl Tween {
    pub fn new(start_ms: f64, duration_ms: f64, from: f64, to: f64) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(0.0),
            from,
            to,
            easing: Easing::Linear,
            state: TaskState::Scheduled,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// `clamp((now - start) / duration, 0, 1)`; zero duration jumps to 1 at start
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        if now_ms < self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated value at a time, without changing state
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let t = self.easing.evaluate(self.progress_at(now_ms));
        self.from + (self.to - self.from) * t
    }

    /// Advance to `now_ms`. Completion is reported once; afterwards the tween
    /// holds its end value.
    pub fn advance(&mut self, now_ms: f64) -> TweenStep {
        if self.state == TaskState::Completed {
            return TweenStep {
                value: self.to,
                progress: 1.0,
                just_completed: false,
            };
        }
        if now_ms < self.start_ms {
            return TweenStep {
                value: self.from,
                progress: 0.0,
                just_completed: false,
            };
        }

        let progress = self.progress_at(now_ms);
        let just_completed = progress >= 1.0;
        self.state = if just_completed {
            TaskState::Completed
        } else {
            TaskState::Running
        };

        TweenStep {
            value: if just_completed { self.to } else { self.value_at(now_ms) },
            progress,
            just_completed,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_finished()
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    pub fn start_value(&self) -> f64 {
        self.from
    }

    pub fn end_value(&self) -> f64 {
        self.to
    }
}
