// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Result container for the level-labeled growth entry points.

use alloc::vec::Vec;
use glam::Mat4;

/// A generated branching structure: transforms paired with generation levels.
///
/// Both columns are filled by a single traversal, so `transforms()[i]` was
/// produced at `levels()[i]` and the two always have the same length. Levels
/// count from 1 at the root's direct children; the identity root itself is
/// never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Growth {
    transforms: Vec<Mat4>,
    levels: Vec<u32>,
}

impl Growth {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            transforms: Vec::with_capacity(capacity),
            levels: Vec::with_capacity(capacity),
        }
    }

    /// Append one node, keeping the two columns in lockstep.
    pub(crate) fn push(&mut self, transform: Mat4, level: u32) {
        self.transforms.push(transform);
        self.levels.push(level);
    }

    /// Number of generated nodes.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// The generated transforms, in emission order.
    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// The generation level of each transform, parallel to
    /// [`transforms`](Self::transforms).
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Iterate `(transform, level)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Mat4, u32)> + '_ {
        self.transforms
            .iter()
            .copied()
            .zip(self.levels.iter().copied())
    }

    /// Split into the two parallel columns.
    pub fn into_parts(self) -> (Vec<Mat4>, Vec<u32>) {
        (self.transforms, self.levels)
    }
}
