//! # gs-round — Round State Machine
//!
//! Owns the session balance and sequences one round at a time:
//!
//! ```text
//!  submit_bet(bet, now)
//!        │
//!        v
//!  Idle/Waving ──▶ FadingOut ──▶ validate ──▶ Revealing ──▶ evaluate ──▶ pay ──▶ Waving
//!                  (if symbols      │ insufficient
//!                   are shown)      └──────────▶ Idle (Error log, balance untouched)
//! ```
//!
//! Everything after `submit_bet` is driven by `tick(now_ms)`. Validation,
//! evaluation and payment happen inside a single tick, so only the four
//! states in [`RoundState`] are observable. Bets that arrive mid-round wait in
//! a FIFO queue.

pub mod input;
pub mod machine;
pub mod session;
pub mod stats;
pub mod view;

pub use input::*;
pub use machine::*;
pub use session::*;
pub use stats::*;
pub use view::*;
