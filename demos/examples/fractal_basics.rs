// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fractal expansion basics.
//!
//! Expand two child rules a few generations deep and show the count law.
//!
//! Run:
//! - `cargo run -p ramify_demos --example fractal_basics`

use glam::{Mat4, Vec3};
use ramify_fractal::{grow_with_levels, node_count};

fn main() {
    // Two children per node: step right and step up, each shrinking by half.
    let rules = [
        Mat4::from_translation(Vec3::X) * Mat4::from_scale(Vec3::splat(0.5)),
        Mat4::from_translation(Vec3::Y) * Mat4::from_scale(Vec3::splat(0.5)),
    ];
    // Every step first moves to the tip of the parent segment.
    let placement = Mat4::from_translation(Vec3::Z * 0.25);

    let depth = 4;
    let growth = grow_with_levels(&rules, placement, depth);
    println!(
        "{} rules, depth {depth}: {} transforms",
        rules.len(),
        growth.len()
    );
    assert_eq!(growth.len(), node_count(rules.len(), depth));

    // Count nodes per generation: 2, 4, 8, 16.
    let mut per_level = vec![0usize; depth as usize];
    for level in growth.levels() {
        per_level[(level - 1) as usize] += 1;
    }
    for (i, n) in per_level.iter().enumerate() {
        println!("  level {}: {n} nodes", i + 1);
    }

    // The first node of each generation along the "right" branch.
    for (transform, level) in growth.iter().take(4) {
        let p = transform.transform_point3(Vec3::ZERO);
        println!("  level {level} lands at {p}");
    }
}
