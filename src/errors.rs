// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for profile arithmetic, invariant requests and the engine.
//!
//! Three layers:
//! - [`ProfileError`]: a sequence operation was called outside its contract.
//! - [`InvariantError`]: the admissibility gate rejected a request.
//! - [`EngineError`]: anything that stops a run (strict mode or bad config).
//!
//! In lenient mode none of these abort a run; they are recorded in
//! [`crate::state::Diagnostics`] and the affected value degrades to zero.

use crate::sequence::Profile;
use crate::state::InvariantKey;
use thiserror::Error;

/// A sequence operation was called with operands outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Operand does not have the configured fixed length.
    #[error("profile {profile} has length {found}, expected {expected}")]
    LengthMismatch {
        profile: Profile,
        expected: usize,
        found: usize,
    },

    /// `subtract` or `vector_binomial` with a non-dominating pair.
    #[error("{minuend} must dominate {subtrahend}")]
    NotDominating { minuend: Profile, subtrahend: Profile },

    /// A component exceeds the binomial table bound.
    #[error("component {value} of {profile} exceeds binomial table bound {bound}")]
    OutOfTableRange {
        profile: Profile,
        value: u32,
        bound: usize,
    },
}

/// The admissibility gate rejected an invariant request.
///
/// These are never data. [`InvariantError::sentinel`] gives the numeric code
/// returned in place of a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("I({alpha}) + I({beta}) must equal {expected}")]
    WeightMismatch {
        alpha: Profile,
        beta: Profile,
        expected: i64,
    },

    #[error("degree should be positive: {0}")]
    NonPositiveDegree(i32),

    #[error("the number of nodes can't be negative: {0}")]
    NegativeNodes(i32),

    #[error("curve class ({a}, {b}) has a negative component")]
    NegativeClass { a: i32, b: i32 },

    #[error("Hirzebruch index can't be negative: {0}")]
    NegativeSurface(i32),

    #[error("curve class {0} does not belong to this surface")]
    UnknownClass(String),
}

impl InvariantError {
    /// Numeric code for this rejection: -2, -3 or 0.
    pub fn sentinel(&self) -> i64 {
        match self {
            InvariantError::NonPositiveDegree(_) => -2,
            InvariantError::NegativeNodes(_) => -3,
            _ => 0,
        }
    }
}

/// Which recurrence term issued a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Move one tangency from an unassigned to an assigned point.
    Tangency,
    /// Reduce the curve class by one generation.
    Reduction,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Tangency => write!(f, "first term"),
            Term::Reduction => write!(f, "second term"),
        }
    }
}

/// Errors that stop an engine run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Invalid(#[from] InvariantError),

    /// A recurrence term referenced a key absent from its generation.
    #[error("while finding {requested}: {missing} can't be found ({term})")]
    MissingEntry {
        requested: InvariantKey,
        missing: InvariantKey,
        term: Term,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// An observer failed to write its output.
    #[error("output error: {0}")]
    Output(String),
}
