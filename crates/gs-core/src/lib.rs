//! # gs-core — GemSlot game rules
//!
//! Everything about a round that does not depend on time:
//!
//! - **Symbols**: the closed set of seven gems and their highlight tints
//! - **Outcome Generator**: uniform draws with an injectable random source
//! - **Payout Evaluator**: count-pattern rules, rarest first
//! - **Configuration**: slot count, starting balance, timing profiles
//! - **Simulation**: parallel batch RTP runs over generator + evaluator
//!
//! ## Architecture
//!
//! ```text
//! RandomSource ──▶ OutcomeGenerator ──▶ Outcome
//!                                          │
//!                                          v
//!                  PayoutTable::evaluate(outcome, bet) ──▶ Evaluation
//! ```

pub mod config;
pub mod error;
pub mod outcome;
pub mod payout;
pub mod result;
pub mod rng;
pub mod simulation;
pub mod symbols;
pub mod timing;

pub use config::*;
pub use error::*;
pub use outcome::*;
pub use payout::*;
pub use result::*;
pub use rng::*;
pub use simulation::*;
pub use symbols::*;
pub use timing::*;
