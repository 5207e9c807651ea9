use std::hint::black_box;

use clincalc_engine::{ClinicalCalcEngine, LabPanel};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_evaluate(c: &mut Criterion) {
    let engine = ClinicalCalcEngine::new();
    let panel = LabPanel::default();

    c.bench_function("evaluate_default_panel", |b| {
        b.iter(|| engine.evaluate(black_box(&panel)).unwrap());
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
