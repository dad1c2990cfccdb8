// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed binomial coefficients and the vector binomial.
//!
//! `C[n][k]` for `0 <= k <= n <= N`, built once with the Pascal recurrence.
//! Entries are exact [`BigInt`]s so large bounds cannot overflow.

use crate::errors::ProfileError;
use crate::sequence::Profile;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Square table of binomial coefficients up to a run-wide bound.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    bound: usize,
    rows: Vec<Vec<BigInt>>,
}

impl BinomialTable {
    /// Build `C[n][k]` for `n, k <= bound`.
    ///
    /// `C[0][0] = 1`, `C[i][0] = 1`, `C[0][j>0] = 0` and
    /// `C[i][j] = C[i-1][j-1] + C[i-1][j]`, which is zero for `j > i`.
    pub fn new(bound: usize) -> Self {
        let mut rows: Vec<Vec<BigInt>> = Vec::with_capacity(bound + 1);
        let mut first = vec![BigInt::zero(); bound + 1];
        first[0] = BigInt::one();
        rows.push(first);

        for i in 1..=bound {
            let prev = &rows[i - 1];
            let mut row = vec![BigInt::zero(); bound + 1];
            row[0] = BigInt::one();
            for j in 1..=i {
                row[j] = &prev[j - 1] + &prev[j];
            }
            rows.push(row);
        }

        Self { bound, rows }
    }

    /// Largest `n` the table covers.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// `C[n][k]`, or `None` outside the table.
    pub fn get(&self, n: usize, k: usize) -> Option<&BigInt> {
        self.rows.get(n).and_then(|row| row.get(k))
    }

    /// `prod C[c[i]][d[i]]` over the common index range.
    ///
    /// Requires `c` to dominate `d`; positions where only `c` is defined
    /// contribute `C[c[i]][0] = 1`.
    pub fn vector_binomial(&self, c: &Profile, d: &Profile) -> Result<BigInt, ProfileError> {
        if !c.dominates(d) {
            return Err(ProfileError::NotDominating {
                minuend: c.clone(),
                subtrahend: d.clone(),
            });
        }

        let common = c.len().min(d.len());
        let mut product = BigInt::one();
        for i in 0..common {
            let n = c.get(i) as usize;
            let entry = self
                .get(n, d.get(i) as usize)
                .ok_or_else(|| ProfileError::OutOfTableRange {
                    profile: c.clone(),
                    value: c.get(i),
                    bound: self.bound,
                })?;
            product *= entry;
        }
        Ok(product)
    }
}
