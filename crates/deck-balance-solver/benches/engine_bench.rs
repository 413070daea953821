// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{Criterion, criterion_group, criterion_main};
use deck_balance_core::{grid::GridDims, weight::Weight};
use deck_balance_model::generator::{ManifestGenConfig, ManifestGenerator};
use deck_balance_solver::{config::EngineConfig, engine::PlacementEngine};
use std::hint::black_box;

fn manifest(amount: usize, seed: u64) -> Vec<deck_balance_model::container::Container> {
    let config = ManifestGenConfig::new(amount, Weight::new(1_000.0), Weight::new(50_000.0), seed)
        .expect("valid generator config");
    ManifestGenerator::new(config).generate()
}

fn bench_place_full_deck(c: &mut Criterion) {
    let manifest = manifest(84, 42);
    let engine = PlacementEngine::new(EngineConfig::canonical());

    c.bench_function("place_84_on_6x14", |b| {
        b.iter(|| engine.place(black_box(&manifest)).expect("plan"))
    });
}

fn bench_place_large_grid(c: &mut Criterion) {
    let manifest = manifest(400, 42);
    let engine = PlacementEngine::new(EngineConfig::canonical().with_dims(GridDims::new(20, 20)));

    c.bench_function("place_400_on_20x20", |b| {
        b.iter(|| engine.place(black_box(&manifest)).expect("plan"))
    });
}

criterion_group!(benches, bench_place_full_deck, bench_place_large_grid);
criterion_main!(benches);
