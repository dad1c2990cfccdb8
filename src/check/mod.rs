// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consistency checks run as generation observers.

mod monotonicity;

pub use monotonicity::{MonotonicityChecker, MonotonicityViolation};
