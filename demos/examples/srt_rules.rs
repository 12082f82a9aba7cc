// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building child rules from SRT lists, then expanding them.
//!
//! The SRT builder and the fractal generator are independent; a host wires
//! them together. Mismatched list lengths cycle, so one scale can serve any
//! number of rotations.
//!
//! Run:
//! - `cargo run -p ramify_demos --example srt_rules`

use glam::{Mat4, Vec3};
use ramify_fractal::{grow, node_count};
use ramify_srt::matrices;

fn main() {
    // Three rotations share a single translation and a single scale: the
    // shorter lists repeat, yielding three child rules.
    let rules = matrices(
        &[Vec3::Y],
        &[
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(0.0, 2.1, 0.5),
            Vec3::new(0.0, -2.1, 0.5),
        ],
        &[Vec3::splat(0.6)],
    );
    println!("built {} child rules from cycled SRT lists", rules.len());
    assert_eq!(rules.len(), 3);

    let placement = Mat4::from_translation(Vec3::Y);
    let depth = 4;
    let transforms = grow(&rules, placement, depth);
    println!(
        "expanded to {} transforms (expected {})",
        transforms.len(),
        node_count(rules.len(), depth)
    );
    assert_eq!(transforms.len(), node_count(rules.len(), depth));

    // Tips of the first branch chain.
    for transform in transforms.iter().take(depth as usize) {
        println!("  {}", transform.transform_point3(Vec3::ZERO));
    }
}
