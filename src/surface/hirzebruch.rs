// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hirzebruch surface F_n rules (Vakil).
//!
//! Curve classes are `ah + bf` with `h^2 = n` and `f` the fiber class;
//! tangency is measured against the divisor `E = h - nf`. Starting from the
//! requested top class `Ah + Bf`, generation `i` is the class
//! `(Ah + Bf) - (A - i)E = ih + (B + n(A - i))f`, so the target weight
//! `I(alpha) + I(beta)` is the fiber component `B + n(A - i)`.
//!
//! Profiles have length `B + A*n + gdiff + 1`: the largest fiber component is
//! `B + A*n` and `|gamma| <= gdiff + 1`.

use crate::errors::InvariantError;
use crate::sequence::Profile;

/// `g_a(ah + bf) = (a - 1)(b - 1) + a(a - 1)n / 2`.
pub fn arithmetic_genus(n: i32, a: i32, b: i32) -> i32 {
    (a - 1) * (b - 1) + a * (a - 1) * n / 2
}

/// Fiber component of generation `i` below the top class `Ah + Bf`.
pub fn fiber_component(n: i32, top_a: i32, top_b: i32, i: i32) -> i32 {
    top_b + n * (top_a - i)
}

/// Fixed profile length of a run.
pub fn profile_length(n: i32, top_a: i32, top_b: i32, max_genus_drop: i32) -> usize {
    (top_b + top_a * n + max_genus_drop + 1) as usize
}

pub fn check_request(
    n: i32,
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
    if n < 0 {
        return Err(InvariantError::NegativeSurface(n));
    }
    Ok(())
}
