// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quadric surface P^1 x P^1 rules (Vakil).
//!
//! Invariants `N(O(a, b), g, alpha, beta)` count genus `g` curves in `|O(a, b)|`
//! with tangency conditions against a fixed line in `|O(1, 0)|`. The fiber
//! component `b` stays fixed while `a` is the recursion index, so
//! `I(alpha) + I(beta) = b` in every generation.

use crate::errors::InvariantError;
use crate::sequence::Profile;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::ops::RangeInclusive;

/// Arithmetic genus of `O(a, b)`: `(a - 1)(b - 1)`.
pub fn arithmetic_genus(a: i32, b: i32) -> i32 {
    (a - 1) * (b - 1)
}

/// Genera from `g_a - max_genus_drop` up to `g_a`.
pub fn genus_window(arithmetic_genus: i32, max_genus_drop: i32) -> RangeInclusive<i32> {
    (arithmetic_genus - max_genus_drop)..=arithmetic_genus
}

pub fn check_request(
    a: i32,
    b: i32,
    alpha: &Profile,
    beta: &Profile,
) -> Result<(), InvariantError> {
    if alpha.weighted_sum() + beta.weighted_sum() != b as i64 {
        return Err(InvariantError::WeightMismatch {
            alpha: alpha.clone(),
            beta: beta.clone(),
            expected: b as i64,
        });
    }
    if a < 0 || b < 0 {
        return Err(InvariantError::NegativeClass { a, b });
    }
    Ok(())
}

/// Only fiber classes with no unassigned tangency: `b` disjoint fibers, each
/// through one assigned point, genus `1 - b`.
///
/// Shared with the Hirzebruch rules, where the fiber class behaves the same.
pub fn fiber_base_case(a: i32, b: i32, genus: i32, alpha: &Profile, beta: &Profile) -> Option<BigInt> {
    if a != 0 || beta.total() != 0 {
        return None;
    }
    if alpha.is_concentrated_at_first() && genus == 1 - b {
        Some(BigInt::one())
    } else {
        Some(BigInt::zero())
    }
}

/// `g' = g - |gamma| + 1`.
pub fn reduced_genus(genus: i32, gamma_total: i64) -> i32 {
    genus - gamma_total as i32 + 1
}

/// Range of `|gamma|` keeping `g'` inside the previous generation's window.
pub fn gamma_total_bounds(genus: i32, previous_window: &RangeInclusive<i32>) -> (i64, i64) {
    (
        (genus + 1 - previous_window.end()) as i64,
        (genus + 1 - previous_window.start()) as i64,
    )
}
