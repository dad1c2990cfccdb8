// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use crate::errors::ProfileError;
use crate::memo::{BinomialTable, Partitions};
use crate::sequence::Profile;
use crate::surface::SurfaceSpec;

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Built once per run from the surface bounds and never changed afterwards.
/// It can be shared across several engines of the same surface (via clone).
///
/// # Size
///
/// The partition table dominates: `p(k)` grows like `exp(pi sqrt(2k/3))`, so
/// a plane run to degree 20 holds 627 profiles of the top weight. The
/// binomial table is `(N + 1)^2` big integers, `N` being the larger of the
/// profile length and the largest target weight.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Fixed length of every profile in the run.
    pub profile_len: usize,

    /// `C[n][k]` for `0 <= k <= n <= N`.
    pub binomials: BinomialTable,

    /// All length-`profile_len` profiles of each weight up to the largest target.
    pub partitions: Partitions,
}

impl MemoizedData {
    /// Initialize all MEMO data structures for a surface.
    pub fn new(surface: &SurfaceSpec) -> Self {
        let profile_len = surface.profile_length();
        let max_weight = surface.max_target_weight();

        tracing::debug!(profile_len, max_weight, "initializing MEMO tables");

        let binomials = BinomialTable::new(profile_len.max(max_weight));
        let partitions = Partitions::new(max_weight, profile_len);

        tracing::debug!(
            profiles = (0..=max_weight as i64)
                .map(|k| partitions.get(k).len())
                .sum::<usize>(),
            "MEMO tables ready"
        );

        Self {
            profile_len,
            binomials,
            partitions,
        }
    }

    /// Whether these tables are large enough for every lookup a run on
    /// `surface` makes: same profile length, partitions up to the largest
    /// target weight and binomials up to the larger of the two.
    pub fn covers(&self, surface: &SurfaceSpec) -> bool {
        let profile_len = surface.profile_length();
        let max_weight = surface.max_target_weight();
        self.profile_len == profile_len
            && self.partitions.max_weight() >= max_weight
            && self.binomials.bound() >= profile_len.max(max_weight)
    }

    /// Reject a profile that does not have the run's fixed length.
    pub fn check_length(&self, profile: &Profile) -> Result<(), ProfileError> {
        if profile.len() == self.profile_len {
            Ok(())
        } else {
            Err(ProfileError::LengthMismatch {
                profile: profile.clone(),
                expected: self.profile_len,
                found: profile.len(),
            })
        }
    }
}
