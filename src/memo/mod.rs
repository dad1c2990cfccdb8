// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Tables built once per run and never changed:
//! - Binomial coefficients `C[n][k]` up to the profile bound
//! - Partitions of every weight up to the largest target, in scan order

pub mod binomial;
pub mod partitions;

pub use binomial::BinomialTable;
pub use partitions::Partitions;
