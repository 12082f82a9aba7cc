// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use ramify_srt::matrices;

fn gen_vectors(count: usize, base: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| Vec3::new(base + i as f32, base, base - i as f32))
        .collect()
}

fn bench_cycle(c: &mut Criterion) {
    // Matched lengths, then heavily mismatched lengths that force wraparound.
    for &(t_len, r_len, s_len) in &[(1024usize, 1024usize, 1024usize), (1024, 7, 1)] {
        let translations = gen_vectors(t_len, 0.0);
        let rotations = gen_vectors(r_len, 0.1);
        let scales = gen_vectors(s_len, 1.0);
        let longest = t_len.max(r_len).max(s_len) as u64;
        let mut group = c.benchmark_group(format!("srt/{t_len}t_{r_len}r_{s_len}s"));
        group.throughput(Throughput::Elements(longest));
        group.bench_function("matrices", |b| {
            b.iter(|| black_box(matrices(&translations, &rotations, &scales)));
        });
        group.finish();
    }
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
