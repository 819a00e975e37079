//! Outcome generation and symbol counting

use serde::{Deserialize, Serialize};

use crate::error::{GsError, GsResult};
use crate::rng::{RandomSource, chacha_source};
use crate::symbols::{SYMBOL_COUNT, Symbol};

/// Symbols for one round, one per slot position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome(Vec<Symbol>);

impl Outcome {
    /// Create from symbols. An outcome must cover at least one slot.
    pub fn new(symbols: Vec<Symbol>) -> GsResult<Self> {
        if symbols.is_empty() {
            return Err(GsError::InvalidInput(
                "outcome must contain at least one symbol".into(),
            ));
        }
        Ok(Self(symbols))
    }

    /// Same symbol in every slot
    pub fn uniform(symbol: Symbol, slot_count: usize) -> GsResult<Self> {
        Self::new(vec![symbol; slot_count])
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<Symbol> {
        self.0.get(slot).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    /// Per-symbol counts
    pub fn counts(&self) -> SymbolCounts {
        SymbolCounts::from_symbols(&self.0)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|s| s.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Symbol → count map. Counts always sum to the outcome length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolCounts {
    counts: [u32; SYMBOL_COUNT],
}

impl SymbolCounts {
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = [0u32; SYMBOL_COUNT];
        for symbol in symbols {
            counts[symbol.index()] += 1;
        }
        Self { counts }
    }

    /// Count for one symbol
    #[inline]
    pub fn count(&self, symbol: Symbol) -> u32 {
        self.counts[symbol.index()]
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Non-zero counts sorted descending (`occ` in the payout rules)
    pub fn occurrences(&self) -> Vec<u32> {
        let mut occ: Vec<u32> = self.counts.iter().copied().filter(|&c| c > 0).collect();
        occ.sort_unstable_by(|a, b| b.cmp(a));
        occ
    }

    /// Symbols appearing at least twice; these are highlighted on a win
    pub fn winning_symbols(&self) -> Vec<Symbol> {
        Symbol::ALL
            .iter()
            .copied()
            .filter(|s| self.count(*s) >= 2)
            .collect()
    }

    /// (symbol, count) pairs for symbols that appear
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        Symbol::ALL
            .iter()
            .map(|s| (*s, self.count(*s)))
            .filter(|(_, c)| *c > 0)
    }
}

/// Draws outcomes uniformly, with replacement, from an injected source
pub struct OutcomeGenerator {
    source: Box<dyn RandomSource + Send>,
}

impl OutcomeGenerator {
    /// Create with an explicit random source
    pub fn new(source: impl RandomSource + Send + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Deterministic ChaCha stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(chacha_source(Some(seed)))
    }

    /// OS-seeded ChaCha stream
    pub fn from_entropy() -> Self {
        Self::new(chacha_source(None))
    }

    /// Draw one symbol per slot
    pub fn generate(&mut self, slot_count: usize) -> GsResult<Outcome> {
        if slot_count == 0 {
            return Err(GsError::InvalidConfig("slot count must be at least 1".into()));
        }
        let symbols = (0..slot_count).map(|_| self.draw()).collect();
        Outcome::new(symbols)
    }

    fn draw(&mut self) -> Symbol {
        let u = self.source.next_unit();
        let index = ((u * SYMBOL_COUNT as f64).floor() as usize).min(SYMBOL_COUNT - 1);
        Symbol::ALL[index]
    }
}

impl std::fmt::Debug for OutcomeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutcomeGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn test_counts_sum_to_slot_count() {
        let mut generator = OutcomeGenerator::seeded(7);
        for _ in 0..200 {
            let outcome = generator.generate(7).unwrap();
            assert_eq!(outcome.len(), 7);
            assert_eq!(outcome.counts().total(), 7);
        }
    }

    #[test]
    fn test_scripted_generation() {
        use Symbol::*;
        let expected = vec![Red, Red, Blue, Yellow, Aqua, Pink, Green];
        let mut generator = OutcomeGenerator::new(ScriptedSource::for_symbols(&expected));
        let outcome = generator.generate(7).unwrap();
        assert_eq!(outcome.symbols(), expected.as_slice());
    }

    #[test]
    fn test_zero_slots_rejected() {
        let mut generator = OutcomeGenerator::seeded(1);
        assert!(matches!(
            generator.generate(0),
            Err(GsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unit_edges_map_into_range() {
        let mut generator = OutcomeGenerator::new(ScriptedSource::new(vec![0.0, 0.999_999_9]));
        let outcome = generator.generate(2).unwrap();
        assert_eq!(outcome.get(0), Some(Symbol::Blue));
        assert_eq!(outcome.get(1), Some(Symbol::Yellow));
    }

    #[test]
    fn test_occurrences_sorted_descending() {
        use Symbol::*;
        let outcome = Outcome::new(vec![Aqua, Red, Red, Aqua, Red, Blue, Green]).unwrap();
        let counts = outcome.counts();
        assert_eq!(counts.occurrences(), vec![3, 2, 1, 1]);
        assert_eq!(counts.winning_symbols(), vec![Aqua, Red]);
        assert_eq!(counts.iter().count(), 4);
    }

    #[test]
    fn test_empty_outcome_rejected() {
        assert!(Outcome::new(Vec::new()).is_err());
    }

    #[test]
    fn test_all_symbols_reachable() {
        let mut generator = OutcomeGenerator::seeded(99);
        let mut seen = [false; SYMBOL_COUNT];
        for _ in 0..100 {
            for s in generator.generate(7).unwrap().iter() {
                seen[s.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
