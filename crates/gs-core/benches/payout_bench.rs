//! Payout Evaluation Benchmarks
//!
//! Outcome generation and rule matching per round.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gs_core::{OutcomeGenerator, PayoutTable};

const SLOT_COUNTS: &[usize] = &[5, 7, 12];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &slots in SLOT_COUNTS {
        let mut generator = OutcomeGenerator::seeded(42);
        group.bench_with_input(BenchmarkId::new("chacha8", slots), &slots, |b, &slots| {
            b.iter(|| black_box(generator.generate(slots)))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &slots in SLOT_COUNTS {
        let table = PayoutTable::for_slots(slots);
        let mut generator = OutcomeGenerator::seeded(7);
        let outcomes: Vec<_> = (0..1024)
            .filter_map(|_| generator.generate(slots).ok())
            .collect();

        group.bench_with_input(BenchmarkId::new("table", slots), &slots, |b, _| {
            let mut i = 0usize;
            b.iter(|| {
                let outcome = &outcomes[i % outcomes.len()];
                i += 1;
                black_box(table.evaluate(outcome, 1.0))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_evaluate);
criterion_main!(benches);
