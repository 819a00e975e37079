//! Session statistics

use std::collections::BTreeMap;

use gs_core::RoundResult;
use serde::{Deserialize, Serialize};

/// Running totals for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u64,
    pub rejected_bets: u64,
    pub total_wagered: f64,
    pub total_won: f64,
    pub wins: u64,
    pub losses: u64,
    pub max_multiplier: u32,
    pub rule_hits: BTreeMap<String, u64>,
}

impl SessionStats {
    /// Fold in a settled round
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds_played += 1;
        self.total_wagered += result.bet;
        self.total_won += result.winnings;

        if result.is_win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.max_multiplier = self.max_multiplier.max(result.multiplier);

        if let Some(rule) = &result.rule {
            *self.rule_hits.entry(rule.clone()).or_insert(0) += 1;
        }
    }

    pub fn record_rejection(&mut self) {
        self.rejected_bets += 1;
    }

    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_wagered > 0.0 {
            (self.total_won / self.total_wagered) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            (self.wins as f64 / self.rounds_played as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Won minus wagered
    pub fn net(&self) -> f64 {
        self.total_won - self.total_wagered
    }
}
