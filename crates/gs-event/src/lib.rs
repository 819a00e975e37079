//! GemSlot Notification Bus
//!
//! Synchronous publish/subscribe between the round engine and presentation:
//! - `balance`: authoritative balance after every change
//! - `log`: Info / Error / Success messages for the player
//! - `bet`: accepted bet amounts
//! - `round`: lifecycle signals for mounting and animating slot sprites
//!
//! ## Architecture
//!
//! ```text
//!   RoundMachine ──(dyn Notifier)──▶ NotificationBus
//!                                       ├── balance: Emitter<f64>
//!                                       ├── log:     Emitter<LogEntry>
//!                                       ├── bet:     Emitter<f64>
//!                                       └── round:   Emitter<RoundSignal>
//!                                              │
//!                                              v   (registration order, same call)
//!                                         handlers
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gs_event::{LogKind, NotificationBus, Notifier};
//!
//! let bus = NotificationBus::new();
//! let id = bus.log.register(|entry| println!("{:?}: {}", entry.kind, entry.message));
//! bus.publish_log(LogKind::Info.entry("hello"));
//! bus.log.unregister(id);
//! ```

pub mod bus;
pub mod emitter;
pub mod notification;
pub mod notifier;
pub mod recording;

// Re-exports
pub use bus::NotificationBus;
pub use emitter::{Emitter, HandlerId};
pub use notification::{LogEntry, LogKind, RoundSignal};
pub use notifier::Notifier;
pub use recording::{RecordedEvent, RecordingNotifier};
