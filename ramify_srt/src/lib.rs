// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify SRT: a scale/rotation/translation matrix builder.
//!
//! Ramify SRT turns parallel lists of translation, rotation, and scale
//! vectors into transform matrices, one per index. The lists may have
//! different lengths: shorter lists cycle (repeat from the start) until the
//! longest one is exhausted, matching a "repeat shorter lists" broadcasting
//! convention rather than failing or padding with defaults.
//!
//! - Per index, the composition is scale first, then rotation, then
//!   translation.
//! - The rotation vector holds Euler angles in radians: yaw about Y, pitch
//!   about X, roll about Z, applied in YXZ order.
//!
//! It is a per-index, side-effect-free utility and does not depend on
//! `ramify_fractal`; hosts compose the two (SRT lists describe child rules,
//! the generator expands them).
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use ramify_srt::{matrices, matrix};
//!
//! // One translation and one scale, two rotations: two results, with the
//! // shorter lists reused for both.
//! let out = matrices(
//!     &[Vec3::X],
//!     &[Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)],
//!     &[Vec3::ONE],
//! );
//! assert_eq!(out.len(), 2);
//! assert_eq!(out[0], matrix(Vec3::X, Vec3::ZERO, Vec3::ONE));
//!
//! // Empty input lists produce an empty result rather than faulting.
//! assert!(matrices(&[], &[Vec3::ZERO], &[Vec3::ONE]).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod compose;

pub use compose::{matrices, matrix};
