// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Mat4, Vec3};
use ramify_fractal::{grow, grow_deep, grow_deep_with_levels, grow_with_levels, node_count};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

fn gen_rules(count: usize, seed: u64) -> Vec<Mat4> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            ramify_srt::matrix(
                Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32()),
                Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32()),
                Vec3::splat(0.5 + 0.5 * rng.next_f32()),
            )
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let placement = Mat4::from_translation(Vec3::Z);
    for &(rule_count, depth) in &[(1usize, 512i32), (2, 12), (3, 8), (4, 6)] {
        let rules = gen_rules(rule_count, 0x5eed_0001);
        let emitted = node_count(rule_count, depth) as u64;
        let mut group = c.benchmark_group(format!("grow/{rule_count}rules_depth{depth}"));
        group.throughput(Throughput::Elements(emitted));
        group.bench_function("recursive", |b| {
            b.iter(|| black_box(grow(&rules, placement, depth)));
        });
        group.bench_function("recursive_with_levels", |b| {
            b.iter(|| black_box(grow_with_levels(&rules, placement, depth)));
        });
        group.bench_function("work_stack", |b| {
            b.iter(|| black_box(grow_deep(&rules, placement, depth)));
        });
        group.bench_function("work_stack_with_levels", |b| {
            b.iter(|| black_box(grow_deep_with_levels(&rules, placement, depth)));
        });
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
