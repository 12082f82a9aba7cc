// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Fractal: a glam-native fractal transform generator.
//!
//! Ramify Fractal is a reusable building block for hosts that instance
//! geometry at transforms. It expands a small ordered set of child placement
//! rules into the flat sequence of every descendant transform, in
//! deterministic depth-first pre-order, optionally labeled with the
//! generation level each transform was produced at.
//!
//! - A **child rule** is a [`glam::Mat4`] describing one child relative to
//!   its parent. Rule order defines sibling order at every level.
//! - The **placement transform** is a single [`glam::Mat4`] applied at every
//!   step, moving to the attachment point of the current basis before a rule
//!   acts.
//! - The **basis** is the accumulated ancestor transform. The identity root
//!   is never part of the output; the first emitted generation is level 1.
//!
//! Each emitted node is `basis * placement * rule` under glam's column-vector
//! convention: the rule acts in its own local frame first, then the placement
//! offset, then the accumulated basis. Each child's subtree is emitted in
//! full before its next sibling.
//!
//! # Example
//!
//! ```
//! use glam::{Mat4, Vec3};
//! use ramify_fractal::{grow_with_levels, node_count};
//!
//! // Two child rules: step right and step up, each shrinking by half.
//! let rules = [
//!     Mat4::from_translation(Vec3::X) * Mat4::from_scale(Vec3::splat(0.5)),
//!     Mat4::from_translation(Vec3::Y) * Mat4::from_scale(Vec3::splat(0.5)),
//! ];
//! let placement = Mat4::from_translation(Vec3::Z * 0.25);
//!
//! let growth = grow_with_levels(&rules, placement, 3);
//! assert_eq!(growth.len(), node_count(rules.len(), 3)); // 2 + 4 + 8
//! assert_eq!(growth.levels().first(), Some(&1));
//!
//! for (transform, level) in growth.iter() {
//!     // A host would instance geometry at `transform`, e.g. faded by `level`.
//!     let _ = (transform, level);
//! }
//! ```
//!
//! When the levels are not needed, [`grow`] produces only the transform
//! stream with identical ordering and composition:
//!
//! ```
//! use glam::{Mat4, Vec3};
//! use ramify_fractal::grow;
//!
//! let chain = grow(&[Mat4::from_scale(Vec3::splat(2.0))], Mat4::IDENTITY, 3);
//! assert_eq!(chain.len(), 3); // 2x, 4x, 8x
//! ```
//!
//! ## Degenerate input
//!
//! An empty rule slice or a non-positive depth yields an empty result;
//! neither is an error. The output size is `Σ rule_count^k` for `k` in
//! `1..=total_depth` ([`node_count`]), exponential in depth for more than
//! one rule — bounding it is the caller's job.
//!
//! ## Traversal strategies
//!
//! [`grow`] and [`grow_with_levels`] recurse, using one call frame per
//! generation. [`grow_deep`] and [`grow_deep_with_levels`] produce
//! bit-for-bit the same sequence from an explicit heap work stack, for depth
//! bounds past what the call stack should carry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod grow;
pub mod types;

pub use grow::{grow, grow_deep, grow_deep_with_levels, grow_with_levels, node_count};
pub use types::Growth;
