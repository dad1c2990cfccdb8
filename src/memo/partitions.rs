// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partition tables: every profile of a given weighted sum.
//!
//! A partition `k = 1*a1 + 2*a2 + ...` is stored in Caporaso-Harris form as the
//! profile `(a1, a2, ...)`. For a maximum length `L` and bound `M` the table
//! holds, for each `k` in `0..=M`, every length-`L` profile with `I(p) = k`.
//!
//! # Enumeration order
//!
//! Backtracking fills positions `0..L` in turn. At position `current` the
//! values run from `remaining / (current + 1)` down to 0, so the first profile
//! for `k` is `(k, 0, 0, ...)` and the last has its weight as far right as
//! possible. Callers that scan in a specific order (the generation driver, the
//! monotonicity check) rely on this.
//!
//! # Example
//!
//! For `k = 3`, `L = 3`:
//! - `[3,0,0]`, `[1,1,0]`, `[0,0,1]`

use crate::sequence::Profile;

/// All profiles of each weighted sum up to a bound.
#[derive(Debug, Clone)]
pub struct Partitions {
    length: usize,
    by_weight: Vec<Vec<Profile>>,
}

impl Partitions {
    /// Enumerate partitions of every `k` in `0..=max_weight` into profiles of
    /// exactly `length` positions.
    pub fn new(max_weight: usize, length: usize) -> Self {
        let by_weight = (0..=max_weight)
            .map(|k| {
                let mut result = Vec::new();
                let mut temp = vec![0u32; length];
                generate(k as i64, &mut temp, 0, 0, &mut result);
                result
            })
            .collect();
        Self { length, by_weight }
    }

    /// All profiles with weighted sum `k`; empty for `k < 0` or beyond the bound.
    pub fn get(&self, k: i64) -> &[Profile] {
        if k < 0 {
            return &[];
        }
        self.by_weight
            .get(k as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Profile length of every entry.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Largest weighted sum enumerated.
    pub fn max_weight(&self) -> usize {
        self.by_weight.len() - 1
    }
}

/// Backtracking step. `filled` is `I(temp, current)`.
fn generate(k: i64, temp: &mut [u32], current: usize, filled: i64, result: &mut Vec<Profile>) {
    let remaining = k - filled;
    if remaining == 0 {
        result.push(Profile::from(temp.to_vec()));
        return;
    }
    if current == temp.len() {
        return;
    }
    let weight = current as i64 + 1;
    // Not even one unit fits at the cheapest remaining position.
    if remaining < weight {
        return;
    }
    for value in (0..=remaining / weight).rev() {
        temp[current] = value as u32;
        generate(k, temp, current + 1, filled + value * weight, result);
    }
    temp[current] = 0;
}
