//! Paytable and win evaluation
//!
//! Rules match on the descending symbol counts of an outcome (`occ`). They are
//! checked in table order and the first match wins, so the table lists the rarest
//! patterns first. The three top rules scale with the slot count; the rest are
//! fixed count shapes.

use serde::Serialize;

use crate::outcome::{Outcome, SymbolCounts};

/// Default number of slots
pub const DEFAULT_SLOT_COUNT: usize = 7;

/// A single count-pattern rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutRule {
    /// Rule identifier (e.g. "full_house")
    pub name: &'static str,
    /// Required leading counts; `occ[i]` must equal `pattern[i]`
    pub pattern: Vec<u32>,
    /// Bet multiplier when the rule fires
    pub multiplier: u32,
}

impl PayoutRule {
    pub fn new(name: &'static str, pattern: &[u32], multiplier: u32) -> Self {
        Self {
            name,
            pattern: pattern.to_vec(),
            multiplier,
        }
    }

    /// Missing positions in `occ` count as zero
    #[inline]
    pub fn matches(&self, occ: &[u32]) -> bool {
        self.pattern
            .iter()
            .enumerate()
            .all(|(i, &want)| occ.get(i).copied().unwrap_or(0) == want)
    }
}

/// Result of evaluating an outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Bet multiplier (0 = loss)
    pub multiplier: u32,
    /// bet × multiplier
    pub winnings: f64,
    /// Name of the rule that fired
    pub rule: Option<&'static str>,
    /// Symbol counts of the evaluated outcome
    pub counts: SymbolCounts,
}

impl Evaluation {
    pub fn is_win(&self) -> bool {
        self.multiplier > 0
    }
}

/// Ordered payout rules for a given slot count
#[derive(Debug, Clone, Serialize)]
pub struct PayoutTable {
    slot_count: usize,
    rules: Vec<PayoutRule>,
}

impl PayoutTable {
    /// Standard table for `slot_count` slots.
    ///
    /// | rule              | occ            | multiplier |
    /// |-------------------|----------------|-----------:|
    /// | `all_of_a_kind`   | `[K]`          | 1000       |
    /// | `all_but_one`     | `[K-1]`        | 100        |
    /// | `all_but_two`     | `[K-2]`        | 50         |
    /// | `four_of_a_kind`  | `[4]`          | 5          |
    /// | `full_house`      | `[3, 2]`       | 4          |
    /// | `three_of_a_kind` | `[3]`          | 3          |
    /// | `three_pairs`     | `[2, 2, 2]`    | 3          |
    pub fn for_slots(slot_count: usize) -> Self {
        let k = slot_count as u32;
        let rules = vec![
            PayoutRule::new("all_of_a_kind", &[k], 1000),
            PayoutRule::new("all_but_one", &[k.saturating_sub(1)], 100),
            PayoutRule::new("all_but_two", &[k.saturating_sub(2)], 50),
            PayoutRule::new("four_of_a_kind", &[4], 5),
            PayoutRule::new("full_house", &[3, 2], 4),
            PayoutRule::new("three_of_a_kind", &[3], 3),
            PayoutRule::new("three_pairs", &[2, 2, 2], 3),
        ];
        Self { slot_count, rules }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn rules(&self) -> &[PayoutRule] {
        &self.rules
    }

    /// First rule matching the outcome's counts
    pub fn matching_rule(&self, counts: &SymbolCounts) -> Option<&PayoutRule> {
        let occ = counts.occurrences();
        self.rules.iter().find(|rule| rule.matches(&occ))
    }

    /// Evaluate an outcome against this table
    pub fn evaluate(&self, outcome: &Outcome, bet: f64) -> Evaluation {
        let counts = outcome.counts();
        let (multiplier, rule) = match self.matching_rule(&counts) {
            Some(rule) => (rule.multiplier, Some(rule.name)),
            None => (0, None),
        };

        Evaluation {
            multiplier,
            winnings: bet * multiplier as f64,
            rule,
            counts,
        }
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::for_slots(DEFAULT_SLOT_COUNT)
    }
}
