// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text forms of invariants and generating-series monomials.

use crate::sequence::Profile;
use crate::state::InvariantKey;
use num_bigint::BigInt;

/// Highest profile position given a variable name (`z`).
const LAST_VARIABLE: usize = 25;

/// `N(O(3), 1, [0,0,0], [3,0,0]) = 12`.
pub fn render_invariant(key: &InvariantKey, value: &BigInt) -> String {
    format!("{} = {}", key, value)
}

/// Monomial `b^k c^m ...` of a beta profile.
///
/// Position `i` is named by the letter `'a' + i`; position 0 (simple
/// tangencies) is left out, as are zero exponents.
///
/// ```
/// use singular_curves::output::monomial;
/// use singular_curves::sequence::Profile;
///
/// assert_eq!(monomial(&Profile::from(vec![3, 1, 0, 2])), "b^1 d^2");
/// assert_eq!(monomial(&Profile::from(vec![4, 0])), "");
/// ```
pub fn monomial(beta: &Profile) -> String {
    (1..beta.len().min(LAST_VARIABLE + 1))
        .filter(|&i| beta.get(i) > 0)
        .map(|i| format!("{}^{}", (b'a' + i as u8) as char, beta.get(i)))
        .collect::<Vec<_>>()
        .join(" ")
}
