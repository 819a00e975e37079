//! Session balance
//!
//! The balance lives here and nowhere else. Only the round machine holds a
//! `Session`; presentation sees the balance through notifications.

use gs_core::{GsError, GsResult, RoundResult};

use crate::stats::SessionStats;

/// Balance, round counter and statistics for one play session
#[derive(Debug, Clone)]
pub struct Session {
    balance: f64,
    rounds_started: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            balance: starting_balance,
            rounds_started: 0,
            stats: SessionStats::default(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// A bet equal to the balance is allowed
    pub fn ensure_funds(&self, bet: f64) -> GsResult<()> {
        if bet > self.balance {
            return Err(GsError::InsufficientFunds {
                bet,
                balance: self.balance,
            });
        }
        Ok(())
    }

    /// Take the stake and open a round; returns the new round id
    pub fn debit(&mut self, bet: f64) -> GsResult<u64> {
        self.ensure_funds(bet)?;
        self.balance -= bet;
        self.rounds_started += 1;
        Ok(self.rounds_started)
    }

    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub fn record(&mut self, result: &RoundResult) {
        self.stats.record(result);
    }

    pub fn record_rejection(&mut self) {
        self.stats.record_rejection();
    }

    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(gs_core::DEFAULT_STARTING_BALANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_and_credit() {
        let mut session = Session::default();
        assert_eq!(session.debit(30.0).unwrap(), 1);
        assert_eq!(session.balance(), 70.0);
        session.credit(90.0);
        assert_eq!(session.balance(), 160.0);
        assert_eq!(session.debit(160.0).unwrap(), 2);
        assert_eq!(session.balance(), 0.0);
    }

    #[test]
    fn test_insufficient_funds_leaves_balance() {
        let mut session = Session::new(20.0);
        let err = session.debit(50.0).unwrap_err();
        assert!(matches!(
            err,
            GsError::InsufficientFunds { bet, balance } if bet == 50.0 && balance == 20.0
        ));
        assert_eq!(session.balance(), 20.0);
        assert_eq!(session.rounds_started(), 0);
    }
}
