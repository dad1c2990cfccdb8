// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one engine).
//!
//! - Generation store: previous + current generations of computed invariants
//! - Invariant keys: structured composite lookup keys
//! - Statistics and diagnostics: operation counters and reported problems

pub mod generation;
pub mod key;
pub mod statistics;

pub use generation::{Generation, GenerationStore};
pub use key::InvariantKey;
pub use statistics::{Counters, Diagnostic, DiagnosticKind, Diagnostics, Statistics};
