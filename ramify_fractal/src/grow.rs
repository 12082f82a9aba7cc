// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule expansion: recursive and work-stack traversals over one emission core.

use alloc::vec::Vec;
use glam::Mat4;

use crate::types::Growth;

/// Where a traversal writes emitted nodes.
///
/// One core serves both public output shapes — a bare matrix list and a
/// [`Growth`] with level labels — the sink decides what it keeps.
trait Sink {
    fn emit(&mut self, transform: Mat4, level: u32);
}

impl Sink for Vec<Mat4> {
    #[inline]
    fn emit(&mut self, transform: Mat4, _level: u32) {
        self.push(transform);
    }
}

impl Sink for Growth {
    #[inline]
    fn emit(&mut self, transform: Mat4, level: u32) {
        self.push(transform, level);
    }
}

// Exponential inputs saturate `node_count`; cap what gets preallocated and
// let the vectors grow past it if generation really carries that far.
const PREALLOC_CAP: usize = 1 << 16;

fn capacity_for(rule_count: usize, total_depth: i32) -> usize {
    node_count(rule_count, total_depth).min(PREALLOC_CAP)
}

/// Number of nodes a full expansion emits: `Σ rule_count^k` for `k` in
/// `1..=total_depth`.
///
/// Returns 0 for an empty rule set or a non-positive depth, and saturates at
/// `usize::MAX` once the branching overflows. Lets a host size buffers, or
/// refuse, before a call to [`grow`] commits to an exponential amount of
/// output.
pub fn node_count(rule_count: usize, total_depth: i32) -> usize {
    if rule_count == 0 || total_depth <= 0 {
        return 0;
    }
    let mut total = 0_usize;
    let mut generation = 1_usize;
    for _ in 0..total_depth {
        generation = generation.saturating_mul(rule_count);
        total = total.saturating_add(generation);
    }
    total
}

/// Expand `rules` against `placement` down to `total_depth` generations.
///
/// Emits every descendant transform in depth-first pre-order: children in
/// declared rule order, each child's subtree in full before its next
/// sibling. Each node is `basis * placement * rule` where `basis` is the
/// parent's emitted transform (identity for the first generation, which is
/// itself never emitted).
///
/// An empty `rules` slice or `total_depth <= 0` yields an empty vector.
/// Recursion depth equals `total_depth`; for bounds past what the call stack
/// should carry, use [`grow_deep`].
pub fn grow(rules: &[Mat4], placement: Mat4, total_depth: i32) -> Vec<Mat4> {
    let mut out = Vec::with_capacity(capacity_for(rules.len(), total_depth));
    grow_recursive(
        &mut out,
        rules,
        placement,
        Mat4::IDENTITY,
        total_depth,
        total_depth,
    );
    out
}

/// Expand like [`grow`], labeling every transform with its generation level.
///
/// The returned [`Growth`] pairs each transform with the level it was
/// produced at (1 for the root's direct children), in the same order [`grow`]
/// emits. Both columns come from a single traversal, so their positional
/// correspondence is structural rather than joined after the fact.
pub fn grow_with_levels(rules: &[Mat4], placement: Mat4, total_depth: i32) -> Growth {
    let mut out = Growth::with_capacity(capacity_for(rules.len(), total_depth));
    grow_recursive(
        &mut out,
        rules,
        placement,
        Mat4::IDENTITY,
        total_depth,
        total_depth,
    );
    out
}

/// [`grow`], driven by an explicit heap work stack instead of recursion.
///
/// Produces bit-for-bit the same sequence as [`grow`] for all inputs. The
/// stack holds at most `total_depth * rules.len()` pending frames, so very
/// large depth bounds cost heap instead of call stack.
pub fn grow_deep(rules: &[Mat4], placement: Mat4, total_depth: i32) -> Vec<Mat4> {
    let mut out = Vec::with_capacity(capacity_for(rules.len(), total_depth));
    grow_stacked(&mut out, rules, placement, total_depth);
    out
}

/// [`grow_with_levels`], driven by an explicit heap work stack.
///
/// Produces bit-for-bit the same [`Growth`] as [`grow_with_levels`].
pub fn grow_deep_with_levels(rules: &[Mat4], placement: Mat4, total_depth: i32) -> Growth {
    let mut out = Growth::with_capacity(capacity_for(rules.len(), total_depth));
    grow_stacked(&mut out, rules, placement, total_depth);
    out
}

fn grow_recursive<S: Sink>(
    out: &mut S,
    rules: &[Mat4],
    placement: Mat4,
    basis: Mat4,
    remaining: i32,
    total: i32,
) {
    if remaining <= 0 {
        return;
    }
    // The first emitted generation is level 1.
    let level = (total - remaining + 1) as u32;
    for rule in rules {
        // The rule acts in its own local frame, then the placement offset,
        // then the accumulated basis; the rightmost factor reaches a point
        // first under glam's column-vector convention.
        let next = basis * placement * *rule;
        out.emit(next, level);
        grow_recursive(out, rules, placement, next, remaining - 1, total);
    }
}

struct Frame {
    transform: Mat4,
    level: u32,
}

fn grow_stacked<S: Sink>(out: &mut S, rules: &[Mat4], placement: Mat4, total_depth: i32) {
    if total_depth <= 0 || rules.is_empty() {
        return;
    }
    let last_level = total_depth as u32;
    // Seed with the root's children, reversed so rule 0 pops first. The
    // identity factor is kept so frames match the recursive arithmetic
    // exactly, not just to rounding.
    let mut stack: Vec<Frame> = Vec::with_capacity(rules.len());
    for rule in rules.iter().rev() {
        stack.push(Frame {
            transform: Mat4::IDENTITY * placement * *rule,
            level: 1,
        });
    }
    while let Some(node) = stack.pop() {
        out.emit(node.transform, node.level);
        if node.level < last_level {
            for rule in rules.iter().rev() {
                stack.push(Frame {
                    transform: node.transform * placement * *rule,
                    level: node.level + 1,
                });
            }
        }
    }
}
