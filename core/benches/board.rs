use criterion::{Criterion, criterion_group, criterion_main};
use lights_out_core::*;
use std::hint::black_box;

fn generate(c: &mut Criterion) {
    let config = GameConfig::new(64, 64, 0.5).unwrap();
    c.bench_function("generate 64x64", |b| {
        b.iter(|| RandomBoardGenerator::new(black_box(7)).generate(config))
    });
}

fn toggle(c: &mut Criterion) {
    let config = GameConfig::new(64, 64, 0.5).unwrap();
    let state = GameState::new(RandomBoardGenerator::new(7).generate(config));
    c.bench_function("toggle 64x64", |b| {
        b.iter(|| state.apply_toggle(black_box((31, 31))))
    });
}

criterion_group!(benches, generate, toggle);
criterion_main!(benches);
