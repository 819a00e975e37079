//! Batch payout simulation
//!
//! Runs generator + evaluator only, no animation and no balance. Work is split
//! into fixed-size chunks, each with its own ChaCha stream derived from the
//! seed and chunk index, so a given seed always yields the same report
//! regardless of thread count.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GsError, GsResult};
use crate::outcome::OutcomeGenerator;
use crate::payout::{DEFAULT_SLOT_COUNT, PayoutTable};

/// Rounds per parallel chunk
const CHUNK_ROUNDS: u64 = 10_000;

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    pub rounds: u64,
    pub bet: f64,
    pub seed: u64,
    pub slot_count: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            rounds: 100_000,
            bet: 1.0,
            seed: 0,
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }
}

/// Aggregate results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub rounds: u64,
    pub wins: u64,
    pub total_wagered: f64,
    pub total_paid: f64,
    /// Hits per rule name
    pub rule_hits: BTreeMap<String, u64>,
    /// Largest multiplier seen
    pub max_multiplier: u32,
}

impl SimulationReport {
    /// Return to player, in percent
    pub fn rtp(&self) -> f64 {
        if self.total_wagered > 0.0 {
            (self.total_paid / self.total_wagered) * 100.0
        } else {
            0.0
        }
    }

    /// Winning rounds, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.rounds > 0 {
            (self.wins as f64 / self.rounds as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Integer tallies for one chunk; converted to money once at the end
#[derive(Debug, Default)]
struct ChunkTally {
    rounds: u64,
    wins: u64,
    multiplier_sum: u64,
    max_multiplier: u32,
    rule_hits: BTreeMap<&'static str, u64>,
}

impl ChunkTally {
    fn merge(mut self, other: ChunkTally) -> ChunkTally {
        self.rounds += other.rounds;
        self.wins += other.wins;
        self.multiplier_sum += other.multiplier_sum;
        self.max_multiplier = self.max_multiplier.max(other.max_multiplier);
        for (rule, hits) in other.rule_hits {
            *self.rule_hits.entry(rule).or_insert(0) += hits;
        }
        self
    }
}

fn chunk_seed(seed: u64, chunk: u64) -> u64 {
    seed ^ chunk.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn run_chunk(params: &SimulationParams, table: &PayoutTable, chunk: u64) -> GsResult<ChunkTally> {
    let start = chunk * CHUNK_ROUNDS;
    let rounds = CHUNK_ROUNDS.min(params.rounds - start);
    let mut generator = OutcomeGenerator::seeded(chunk_seed(params.seed, chunk));
    let mut tally = ChunkTally::default();

    for _ in 0..rounds {
        let outcome = generator.generate(params.slot_count)?;
        let eval = table.evaluate(&outcome, params.bet);
        tally.rounds += 1;
        tally.multiplier_sum += eval.multiplier as u64;
        tally.max_multiplier = tally.max_multiplier.max(eval.multiplier);
        if let Some(rule) = eval.rule {
            tally.wins += 1;
            *tally.rule_hits.entry(rule).or_insert(0) += 1;
        }
    }
    Ok(tally)
}

/// Run a batch simulation
pub fn simulate(params: &SimulationParams) -> GsResult<SimulationReport> {
    if params.slot_count == 0 {
        return Err(GsError::InvalidConfig("slot count must be at least 1".into()));
    }
    if !params.bet.is_finite() || params.bet <= 0.0 {
        return Err(GsError::InvalidInput(format!(
            "bet must be a finite positive number, got {}",
            params.bet
        )));
    }

    let table = PayoutTable::for_slots(params.slot_count);
    let chunks = params.rounds.div_ceil(CHUNK_ROUNDS);
    log::info!(
        "Simulating {} rounds on {} slots in {} chunks (seed {})",
        params.rounds,
        params.slot_count,
        chunks,
        params.seed
    );

    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| run_chunk(params, &table, chunk))
        .try_reduce(ChunkTally::default, |a, b| Ok(a.merge(b)))?;

    Ok(SimulationReport {
        rounds: tally.rounds,
        wins: tally.wins,
        total_wagered: params.bet * tally.rounds as f64,
        total_paid: params.bet * tally.multiplier_sum as f64,
        rule_hits: tally
            .rule_hits
            .into_iter()
            .map(|(rule, hits)| (rule.to_string(), hits))
            .collect(),
        max_multiplier: tally.max_multiplier,
    })
}
