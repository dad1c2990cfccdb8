// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tangency profiles: finite sequences of nonnegative integers.
//!
//! Position `i` (0-indexed) counts tangency points of order `i + 1`. A profile
//! `(a1, a2, ...)` is the Caporaso-Harris notation for the partition
//! `1*a1 + 2*a2 + ...`.
//!
//! The arithmetic here accepts operands of differing lengths, treating missing
//! positions as zero. Fixed-length enforcement is the caller's job (see
//! [`crate::context::MemoizedData::check_length`]).
//!
//! # Examples
//!
//! ```
//! use singular_curves::sequence::Profile;
//!
//! let c = Profile::from(vec![2, 1, 0]);
//! let d = Profile::from(vec![1, 1, 0]);
//!
//! assert_eq!(c.weighted_sum(), 4);
//! assert!(c.dominates(&d));
//! assert_eq!(c.subtract(&d).unwrap(), Profile::from(vec![1, 0, 0]));
//! assert_eq!(format!("{}", c), "[2,1,0]");
//! ```

use crate::errors::ProfileError;
use num_bigint::BigInt;
use num_traits::{pow, One};
use std::fmt;

/// A tangency profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Profile(Vec<u32>);

impl Profile {
    /// The all-zero profile of the given length.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component at `i`, zero when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// `I(c) = sum (i+1) * c[i]`.
    pub fn weighted_sum(&self) -> i64 {
        self.weighted_sum_prefix(self.0.len())
    }

    /// `I(c, k)`: the weighted sum over the first `k` positions only.
    pub fn weighted_sum_prefix(&self, k: usize) -> i64 {
        self.0
            .iter()
            .take(k)
            .enumerate()
            .map(|(i, &c)| (i as i64 + 1) * c as i64)
            .sum()
    }

    /// `|c| = sum c[i]`.
    pub fn total(&self) -> i64 {
        self.0.iter().map(|&c| c as i64).sum()
    }

    /// True iff `self[i] >= other[i]` at every index, missing positions being zero.
    pub fn dominates(&self, other: &Profile) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| self.get(i) >= other.get(i))
    }

    /// Componentwise sum, zero-padding the shorter operand.
    pub fn add(&self, other: &Profile) -> Profile {
        let len = self.len().max(other.len());
        Profile((0..len).map(|i| self.get(i) + other.get(i)).collect())
    }

    /// Componentwise difference. Defined only when `self` dominates `other`;
    /// the result has the length of `self`.
    pub fn subtract(&self, other: &Profile) -> Result<Profile, ProfileError> {
        if !self.dominates(other) {
            return Err(ProfileError::NotDominating {
                minuend: self.clone(),
                subtrahend: other.clone(),
            });
        }
        Ok(Profile(
            self.0
                .iter()
                .enumerate()
                .map(|(i, &c)| c - other.get(i))
                .collect(),
        ))
    }

    /// `prod (i+1)^c[i]`, exactly.
    pub fn product_power(&self) -> BigInt {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .fold(BigInt::one(), |acc, (i, &c)| {
                acc * pow(BigInt::from(i + 1), c as usize)
            })
    }

    /// Copy with one unit moved from position `k` of `self` to position `k` of
    /// `to`: returns `(to + e_k, self - e_k)`, or `None` if `self[k] == 0`.
    pub fn transfer_unit(&self, to: &Profile, k: usize) -> Option<(Profile, Profile)> {
        if self.get(k) == 0 || k >= to.len() {
            return None;
        }
        let mut from = self.clone();
        from.0[k] -= 1;
        let mut to = to.clone();
        to.0[k] += 1;
        Some((to, from))
    }

    /// Copy padded with zeros (or truncated) to `len`.
    pub fn resized(&self, len: usize) -> Profile {
        Profile((0..len).map(|i| self.get(i)).collect())
    }

    /// True iff every unit sits in position 0.
    pub fn is_concentrated_at_first(&self) -> bool {
        self.0.iter().skip(1).all(|&c| c == 0)
    }
}

impl From<Vec<u32>> for Profile {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl From<&[u32]> for Profile {
    fn from(values: &[u32]) -> Self {
        Self(values.to_vec())
    }
}

impl fmt::Display for Profile {
    /// Format as `[1,0,0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(values: &[u32]) -> Profile {
        Profile::from(values)
    }

    #[test]
    fn test_weighted_sums() {
        let c = p(&[2, 0, 1, 3]);
        assert_eq!(c.weighted_sum(), 2 + 3 + 12);
        assert_eq!(c.weighted_sum_prefix(0), 0);
        assert_eq!(c.weighted_sum_prefix(3), 5);
        assert_eq!(c.weighted_sum_prefix(10), 17);
        assert_eq!(c.total(), 6);
    }

    #[test]
    fn test_dominates_with_differing_lengths() {
        assert!(p(&[1, 2]).dominates(&p(&[1, 2, 0, 0])));
        assert!(!p(&[1, 2]).dominates(&p(&[1, 2, 1])));
        assert!(p(&[1, 2, 5]).dominates(&p(&[0, 2])));
        assert!(!p(&[0, 2]).dominates(&p(&[1])));
    }

    #[test]
    fn test_add_pads_shorter_operand() {
        assert_eq!(p(&[1, 2]).add(&p(&[0, 1, 4])), p(&[1, 3, 4]));
        assert_eq!(p(&[0, 1, 4]).add(&p(&[1, 2])), p(&[1, 3, 4]));
    }

    #[test]
    fn test_subtract_requires_dominance() {
        assert_eq!(p(&[3, 1, 2]).subtract(&p(&[1, 1])).unwrap(), p(&[2, 0, 2]));
        let err = p(&[1, 0]).subtract(&p(&[0, 1])).unwrap_err();
        assert!(matches!(err, ProfileError::NotDominating { .. }));
    }

    #[test]
    fn test_subtract_add_round_trip() {
        let pairs = [
            (p(&[3, 1, 2]), p(&[1, 1, 0])),
            (p(&[0, 0, 0]), p(&[0, 0, 0])),
            (p(&[4, 4]), p(&[4, 0])),
        ];
        for (c, d) in pairs {
            let diff = c.subtract(&d).unwrap();
            assert_eq!(diff.add(&d), c, "round trip failed for {} - {}", c, d);
        }
    }

    #[test]
    fn test_product_power() {
        assert_eq!(p(&[5, 0, 0]).product_power(), BigInt::from(1));
        assert_eq!(p(&[0, 3, 2]).product_power(), BigInt::from(8 * 9));
        // 2^70 overflows i64
        let big = p(&[0, 70]).product_power();
        assert_eq!(big, pow(BigInt::from(2), 70));
    }

    #[test]
    fn test_transfer_unit() {
        let beta = p(&[0, 2, 1]);
        let alpha = p(&[1, 0, 0]);
        let (a, b) = beta.transfer_unit(&alpha, 1).unwrap();
        assert_eq!(a, p(&[1, 1, 0]));
        assert_eq!(b, p(&[0, 1, 1]));
        assert!(beta.transfer_unit(&alpha, 0).is_none());
    }

    #[test]
    fn test_concentrated_and_resized() {
        assert!(p(&[3, 0, 0]).is_concentrated_at_first());
        assert!(p(&[0, 0]).is_concentrated_at_first());
        assert!(!p(&[2, 1]).is_concentrated_at_first());
        assert_eq!(p(&[1, 2]).resized(4), p(&[1, 2, 0, 0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", p(&[1, 0, 0])), "[1,0,0]");
        assert_eq!(format!("{}", p(&[])), "[]");
    }
}
