// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving per-instance parameters from generation levels.
//!
//! A host typically fades, tints, or thins geometry by generation; the level
//! column of a `Growth` is positionally matched to the transform column, so
//! no join is needed.
//!
//! Run:
//! - `cargo run -p ramify_demos --example fractal_levels`

use glam::{Mat4, Vec3};
use ramify_fractal::grow_with_levels;

fn main() {
    let rules = [
        ramify_srt::matrix(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.6, 0.4),
            Vec3::splat(0.7),
        ),
        ramify_srt::matrix(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -0.6, -0.4),
            Vec3::splat(0.7),
        ),
    ];
    let placement = Mat4::from_translation(Vec3::Y * 0.5);

    let depth = 5;
    let growth = grow_with_levels(&rules, placement, depth);

    // Fade each instance by its generation; the pairing comes straight from
    // the iterator, not from index bookkeeping on the host side.
    let mut faded = 0usize;
    for (transform, level) in growth.iter() {
        let fade = 1.0 - (level as f32 - 1.0) / depth as f32;
        if fade < 0.5 {
            faded += 1;
        }
        let _instance = (transform, fade);
    }
    println!(
        "{} instances, {faded} of them past half fade",
        growth.len()
    );

    let (transforms, levels) = growth.into_parts();
    println!(
        "columns stay parallel: {} transforms, {} levels",
        transforms.len(),
        levels.len()
    );
    assert_eq!(transforms.len(), levels.len());
}
