//! Settled round result

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::payout::Evaluation;

/// Immutable record of one settled round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Monotonic per session, starting at 1
    pub round_id: u64,
    /// Amount wagered
    pub bet: f64,
    /// Symbols per slot
    pub outcome: Outcome,
    /// Bet multiplier (0 = loss)
    pub multiplier: u32,
    /// bet × multiplier
    pub winnings: f64,
    /// multiplier > 0
    pub is_win: bool,
    /// Rule that fired
    pub rule: Option<String>,
    /// Slot positions highlighted as part of the win
    pub highlighted: Vec<usize>,
    /// Balance once winnings are credited
    pub balance_after: f64,
}

impl RoundResult {
    /// Build from an evaluation. Slots are highlighted only on a win, and only
    /// where their symbol appears at least twice.
    pub fn settle(
        round_id: u64,
        bet: f64,
        outcome: Outcome,
        eval: &Evaluation,
        balance_after: f64,
    ) -> Self {
        let highlighted = if eval.is_win() {
            outcome
                .iter()
                .enumerate()
                .filter(|(_, s)| eval.counts.count(*s) >= 2)
                .map(|(slot, _)| slot)
                .collect()
        } else {
            Vec::new()
        };

        Self {
            round_id,
            bet,
            outcome,
            multiplier: eval.multiplier,
            winnings: eval.winnings,
            is_win: eval.is_win(),
            rule: eval.rule.map(str::to_string),
            highlighted,
            balance_after,
        }
    }

    /// Balance change over the whole round (debit + credit)
    pub fn net(&self) -> f64 {
        self.winnings - self.bet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payout::PayoutTable;
    use crate::symbols::Symbol::*;

    #[test]
    fn test_highlight_on_win() {
        let outcome = Outcome::new(vec![Red, Aqua, Red, Blue, Aqua, Red, Green]).unwrap();
        let eval = PayoutTable::default().evaluate(&outcome, 2.0);
        let result = RoundResult::settle(1, 2.0, outcome, &eval, 106.0);
        assert!(result.is_win);
        assert_eq!(result.rule.as_deref(), Some("full_house"));
        assert_eq!(result.highlighted, vec![0, 1, 2, 4, 5]);
        assert_eq!(result.net(), 6.0);
    }

    #[test]
    fn test_no_highlight_on_loss() {
        // A single pair loses, so nothing lights up
        let outcome = Outcome::new(vec![Red, Red, Aqua, Blue, Purple, Pink, Green]).unwrap();
        let eval = PayoutTable::default().evaluate(&outcome, 2.0);
        let result = RoundResult::settle(3, 2.0, outcome, &eval, 98.0);
        assert!(!result.is_win);
        assert!(result.highlighted.is_empty());
        assert_eq!(result.net(), -2.0);
    }
}
