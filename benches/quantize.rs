//! Performance measurement for the full quantization pipeline

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use beadgrid::io::asset::default_palette;
use beadgrid::quantize::generator::generate;
use beadgrid::quantize::synthetic;
use beadgrid::sampler::region::SamplerConfig;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures quantizing a 256x256 gradient down to a 48x48 grid
fn bench_generate_48x48(c: &mut Criterion) {
    let source = synthetic::noisy_gradient(256, 256, 12345);
    let palette = default_palette();
    let config = SamplerConfig::default();

    c.bench_function("generate_48x48", |b| {
        b.iter(|| {
            let (pattern, usage) = generate(&source, 48, 48, &palette, &config);
            black_box((pattern, usage));
        });
    });
}

criterion_group!(benches, bench_generate_48x48);
criterion_main!(benches);
