// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence algebra over tangency profiles.
//!
//! - Profile: fixed-length nonnegative sequences with dominance, add,
//!   subtract, weighted sums and `prod (i+1)^c[i]`
//!
//! The vector binomial `prod C(c[i], d[i])` needs the precomputed table and
//! lives in [`crate::memo::BinomialTable`].

pub mod profile;

pub use profile::Profile;
