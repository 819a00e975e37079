//! Notification bus: one emitter per topic

use crate::emitter::Emitter;
use crate::notification::{LogEntry, RoundSignal};
use crate::notifier::Notifier;

/// Four independent topics. Delivery is synchronous and in registration order.
#[derive(Debug, Default)]
pub struct NotificationBus {
    /// Balance after every change
    pub balance: Emitter<f64>,
    /// Player-facing messages
    pub log: Emitter<LogEntry>,
    /// Accepted bets
    pub bet: Emitter<f64>,
    /// Round lifecycle
    pub round: Emitter<RoundSignal>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers across all topics
    pub fn handler_count(&self) -> usize {
        self.balance.handler_count()
            + self.log.handler_count()
            + self.bet.handler_count()
            + self.round.handler_count()
    }
}

impl Notifier for NotificationBus {
    fn publish_balance(&self, balance: f64) {
        self.balance.emit(&balance);
    }

    fn publish_log(&self, entry: LogEntry) {
        log::debug!("[Bus] log {:?}: {}", entry.kind, entry.message);
        self.log.emit(&entry);
    }

    fn publish_bet_state(&self, bet: f64) {
        self.bet.emit(&bet);
    }

    fn publish_signal(&self, signal: RoundSignal) {
        log::trace!("[Bus] round {}", signal.name());
        self.round.emit(&signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::LogKind;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_topics_are_independent() {
        let bus = NotificationBus::new();
        let balances = Arc::new(Mutex::new(Vec::new()));
        let logs = Arc::new(Mutex::new(Vec::new()));

        let b = Arc::clone(&balances);
        bus.balance.register(move |v| b.lock().push(*v));
        let l = Arc::clone(&logs);
        bus.log.register(move |e: &LogEntry| l.lock().push(e.clone()));

        bus.publish_balance(95.0);
        bus.publish_bet_state(5.0);
        bus.publish_signal(RoundSignal::WaveStarted);

        assert_eq!(*balances.lock(), vec![95.0]);
        assert!(logs.lock().is_empty());

        bus.publish_log(LogKind::Error.entry("Insufficient balance"));
        assert_eq!(logs.lock().len(), 1);
        assert_eq!(logs.lock()[0].kind, LogKind::Error);
        assert_eq!(bus.handler_count(), 2);
    }

    #[test]
    fn test_bus_through_dyn_notifier() {
        let bus = Arc::new(NotificationBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        bus.bet.register(move |v| s.lock().push(*v));

        let notifier: Arc<dyn Notifier> = bus.clone();
        notifier.publish_bet_state(12.5);

        assert_eq!(*seen.lock(), vec![12.5]);
    }
}
