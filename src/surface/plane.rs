// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Projective plane rules (Caporaso-Harris).
//!
//! Invariants `N(d, r, alpha, beta)` count degree `d` curves with `r` nodes
//! satisfying tangency conditions `(alpha, beta)` with a fixed line, through
//! the appropriate number of general points. `I(alpha) + I(beta) = d`.

use crate::errors::InvariantError;
use crate::sequence::Profile;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::ops::RangeInclusive;

/// Degrees `1..=max_degree`, in recursion order.
pub fn degrees(max_degree: i32) -> RangeInclusive<i32> {
    1..=max_degree
}

/// Node counts tracked in every generation.
pub fn node_window(max_nodes: i32) -> RangeInclusive<i32> {
    0..=max_nodes
}

/// Admissibility gate: weight first, then degree, then node count.
pub fn check_request(
    degree: i32,
    nodes: i32,
    alpha: &Profile,
    beta: &Profile,
) -> Result<(), InvariantError> {
    if alpha.weighted_sum() + beta.weighted_sum() != degree as i64 {
        return Err(InvariantError::WeightMismatch {
            alpha: alpha.clone(),
            beta: beta.clone(),
            expected: degree as i64,
        });
    }
    if degree <= 0 {
        return Err(InvariantError::NonPositiveDegree(degree));
    }
    if nodes < 0 {
        return Err(InvariantError::NegativeNodes(nodes));
    }
    Ok(())
}

/// Lines: one through the right number of points, and no nodal ones.
pub fn base_case(degree: i32, nodes: i32) -> Option<BigInt> {
    if degree != 1 {
        return None;
    }
    Some(if nodes == 0 { BigInt::one() } else { BigInt::zero() })
}

/// `r' = r + |gamma| - d + 1`.
pub fn reduced_nodes(degree: i32, nodes: i32, gamma_total: i64) -> i32 {
    nodes + gamma_total as i32 - degree + 1
}

/// Range of `|gamma|` keeping `r'` inside `0..=max_nodes`.
pub fn gamma_total_bounds(degree: i32, nodes: i32, max_nodes: i32) -> (i64, i64) {
    let shift = (degree - 1 - nodes) as i64;
    (shift, max_nodes as i64 + shift)
}
