//! Staggered per-slot reveal
//!
//! Slot `i` starts dropping into place `i × spawn_delay` after round start and
//! fades in over `spawn_duration`. The animator is complete only when every
//! slot has completed; completion order across slots does not matter.

use gs_core::TimingConfig;
use serde::Serialize;

use crate::tween::{TaskState, Tween};

/// Visual state of one slot for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotFrame {
    /// Vertical offset from the slot's resting position (negative = above)
    pub offset_y: f64,
    /// 0.0 invisible, 1.0 fully visible
    pub opacity: f64,
}

impl SlotFrame {
    /// Resting, fully visible
    pub const SETTLED: SlotFrame = SlotFrame {
        offset_y: 0.0,
        opacity: 1.0,
    };
}

/// Per-slot transition reported by [`RevealAnimator::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Started(usize),
    Completed(usize),
}

#[derive(Debug, Clone)]
struct SlotReveal {
    offset: Tween,
    opacity: Tween,
}

/// Owns one round's reveal tasks
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    slots: Vec<SlotReveal>,
    completed: usize,
}

impl RevealAnimator {
    /// Schedule `slot_count` reveals from `round_start_ms`
    pub fn new(slot_count: usize, round_start_ms: f64, timing: &TimingConfig) -> Self {
        let slots = (0..slot_count)
            .map(|i| {
                let start = round_start_ms + i as f64 * timing.spawn_delay_ms;
                SlotReveal {
                    offset: Tween::new(start, timing.spawn_duration_ms, -timing.drop_height, 0.0),
                    opacity: Tween::new(start, timing.spawn_duration_ms, 0.0, 1.0),
                }
            })
            .collect();

        Self {
            slots,
            completed: 0,
        }
    }

    /// Advance every slot to `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> Vec<RevealEvent> {
        let mut events = Vec::new();

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.offset.is_completed() {
                continue;
            }
            let was_scheduled = slot.offset.state() == TaskState::Scheduled;
            let step = slot.offset.advance(now_ms);
            slot.opacity.advance(now_ms);

            if was_scheduled && slot.offset.state() != TaskState::Scheduled {
                events.push(RevealEvent::Started(i));
            }
            if step.just_completed {
                self.completed += 1;
                events.push(RevealEvent::Completed(i));
            }
        }

        events
    }

    /// Current frame for a slot
    pub fn frame(&self, slot: usize, now_ms: f64) -> Option<SlotFrame> {
        self.slots.get(slot).map(|s| SlotFrame {
            offset_y: s.offset.value_at(now_ms),
            opacity: s.opacity.value_at(now_ms),
        })
    }

    /// Frames for all slots
    pub fn frames(&self, now_ms: f64) -> Vec<SlotFrame> {
        (0..self.slots.len())
            .filter_map(|i| self.frame(i, now_ms))
            .collect()
    }

    pub fn slot_state(&self, slot: usize) -> Option<TaskState> {
        self.slots.get(slot).map(|s| s.offset.state())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    /// All slots revealed
    pub fn is_complete(&self) -> bool {
        self.completed == self.slots.len()
    }

    /// Time at which the last reveal ends
    pub fn end_ms(&self) -> f64 {
        self.slots
            .iter()
            .map(|s| s.offset.end_ms())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> RevealAnimator {
        RevealAnimator::new(7, 0.0, &TimingConfig::normal())
    }

    #[test]
    fn test_staggered_start() {
        let mut anim = animator();

        assert_eq!(anim.tick(0.0), vec![RevealEvent::Started(0)]);
        assert_eq!(anim.slot_state(1), Some(TaskState::Scheduled));

        // Slot 0 completes exactly when slot 1 starts
        assert_eq!(
            anim.tick(500.0),
            vec![RevealEvent::Completed(0), RevealEvent::Started(1)]
        );
        assert_eq!(anim.completed_count(), 1);
    }

    #[test]
    fn test_frames_interpolate() {
        let mut anim = animator();
        anim.tick(250.0);

        let frame = anim.frame(0, 250.0).unwrap();
        assert_eq!(frame.offset_y, -25.0);
        assert_eq!(frame.opacity, 0.5);

        let hidden = anim.frame(3, 250.0).unwrap();
        assert_eq!(hidden.offset_y, -50.0);
        assert_eq!(hidden.opacity, 0.0);
    }

    #[test]
    fn test_complete_only_after_every_slot() {
        let mut anim = animator();
        let mut completed = Vec::new();
        let mut now = 0.0;

        while !anim.is_complete() {
            for event in anim.tick(now) {
                if let RevealEvent::Completed(i) = event {
                    completed.push(i);
                }
            }
            now += 16.0;
        }

        assert_eq!(completed, (0..7).collect::<Vec<_>>());
        assert!(now > 3500.0);
        assert_eq!(anim.end_ms(), 3500.0);
        assert!(anim.frames(now).iter().all(|f| *f == SlotFrame::SETTLED));
    }

    #[test]
    fn test_each_slot_completes_once() {
        let mut anim = animator();
        let mut count = 0;
        for now in [0.0, 10_000.0, 20_000.0] {
            count += anim
                .tick(now)
                .iter()
                .filter(|e| matches!(e, RevealEvent::Completed(_)))
                .count();
        }
        assert_eq!(count, 7);
    }

    #[test]
    fn test_instant_timing_completes_on_first_tick() {
        let mut anim = RevealAnimator::new(7, 100.0, &TimingConfig::instant());
        let events = anim.tick(100.0);
        assert_eq!(events.len(), 14);
        assert!(anim.is_complete());
    }
}
