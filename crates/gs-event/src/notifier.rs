//! Publishing capability injected into the round engine

use crate::notification::{LogEntry, RoundSignal};

/// Everything the round engine may publish. The engine holds a `dyn Notifier`
/// and never reaches a global bus.
pub trait Notifier: Send + Sync {
    /// Authoritative balance after a change
    fn publish_balance(&self, balance: f64);

    /// Player-facing message
    fn publish_log(&self, entry: LogEntry);

    /// Accepted bet amount
    fn publish_bet_state(&self, bet: f64);

    /// Round lifecycle signal
    fn publish_signal(&self, signal: RoundSignal);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn publish_balance(&self, balance: f64) {
        (**self).publish_balance(balance)
    }

    fn publish_log(&self, entry: LogEntry) {
        (**self).publish_log(entry)
    }

    fn publish_bet_state(&self, bet: f64) {
        (**self).publish_bet_state(bet)
    }

    fn publish_signal(&self, signal: RoundSignal) {
        (**self).publish_signal(signal)
    }
}
