//! Recording notifier for assertions in tests and replays

use parking_lot::Mutex;

use crate::notification::{LogEntry, LogKind, RoundSignal};
use crate::notifier::Notifier;

/// One published event, in publish order
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    Balance(f64),
    Log(LogEntry),
    Bet(f64),
    Signal(RoundSignal),
}

/// Stores everything published to it
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    /// Drain and return all events
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn balances(&self) -> Vec<f64> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Balance(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<LogEntry> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Log(entry) => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }

    /// Logs of one kind
    pub fn logs_of(&self, kind: LogKind) -> Vec<LogEntry> {
        self.logs().into_iter().filter(|e| e.kind == kind).collect()
    }

    pub fn bets(&self) -> Vec<f64> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Bet(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn signals(&self) -> Vec<RoundSignal> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Signal(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Signal names only, handy for sequence assertions
    pub fn signal_names(&self) -> Vec<&'static str> {
        self.signals().iter().map(RoundSignal::name).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn publish_balance(&self, balance: f64) {
        self.events.lock().push(RecordedEvent::Balance(balance));
    }

    fn publish_log(&self, entry: LogEntry) {
        self.events.lock().push(RecordedEvent::Log(entry));
    }

    fn publish_bet_state(&self, bet: f64) {
        self.events.lock().push(RecordedEvent::Bet(bet));
    }

    fn publish_signal(&self, signal: RoundSignal) {
        self.events.lock().push(RecordedEvent::Signal(signal));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let rec = RecordingNotifier::new();
        rec.publish_balance(95.0);
        rec.publish_bet_state(5.0);
        rec.publish_log(LogKind::Success.entry("You won 20.00$"));
        rec.publish_signal(RoundSignal::SpawnStarted { slot: 0 });

        assert_eq!(rec.events().len(), 4);
        assert_eq!(rec.balances(), vec![95.0]);
        assert_eq!(rec.bets(), vec![5.0]);
        assert_eq!(rec.logs_of(LogKind::Success).len(), 1);
        assert!(rec.logs_of(LogKind::Error).is_empty());
        assert_eq!(rec.signal_names(), vec!["spawn_started"]);

        assert_eq!(rec.take().len(), 4);
        assert!(rec.events().is_empty());
    }
}
