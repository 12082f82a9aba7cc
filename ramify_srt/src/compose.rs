// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-index SRT composition and repeat-shortest cycling.

use alloc::vec::Vec;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Build one transform from a translation/rotation/scale triple.
///
/// Scale is applied first, then rotation, then translation. The rotation
/// vector holds Euler angles in radians — yaw about Y, pitch about X, roll
/// about Z — applied in YXZ order.
pub fn matrix(translation: Vec3, rotation: Vec3, scale: Vec3) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::YXZ, rotation.y, rotation.x, rotation.z);
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

/// Build one transform per index in `0..max(len)`, cycling shorter inputs.
///
/// Output index `i` reads `translations[i % translations.len()]`, and
/// likewise for `rotations` and `scales`, so shorter lists repeat from their
/// start rather than padding or failing. An empty list yields an empty
/// result; it is not an error.
pub fn matrices(translations: &[Vec3], rotations: &[Vec3], scales: &[Vec3]) -> Vec<Mat4> {
    if translations.is_empty() || rotations.is_empty() || scales.is_empty() {
        return Vec::new();
    }
    let count = translations.len().max(rotations.len()).max(scales.len());
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(matrix(
            translations[i % translations.len()],
            rotations[i % rotations.len()],
            scales[i % scales.len()],
        ));
    }
    out
}
