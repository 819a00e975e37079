//! # gs-anim — Reveal Animator
//!
//! Time-based animation driven by explicit frame ticks. There are no recurring
//! callbacks; each animation is a plain state object advanced by
//! `tick(now_ms)`, so tests drive it with synthetic clock values.
//!
//! ## Architecture
//!
//! ```text
//! FrameClock::now_ms()
//!        │
//!        v
//!  RevealAnimator::tick ──▶ Vec<RevealEvent>      (Started / Completed per slot)
//!        │                  SlotFrame per slot     (offset_y, opacity)
//!  FadeOut::tick        ──▶ opacity 1 → 0
//!  WaveSlot::tick       ──▶ per-slot sine offsets  (until disposed)
//! ```

pub mod clock;
pub mod easing;
pub mod fade;
pub mod reveal;
pub mod tween;
pub mod wave;

pub use clock::*;
pub use easing::*;
pub use fade::*;
pub use reveal::*;
pub use tween::*;
pub use wave::*;
