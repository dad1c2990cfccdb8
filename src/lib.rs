// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive enumeration of curves with prescribed tangency to a divisor.
//!
//! Computes the Caporaso-Harris numbers `N(d, r, alpha, beta)` of nodal plane
//! curves and Vakil's analogues on `P^1 x P^1` and the Hirzebruch surfaces
//! `F_n`. Here `alpha` counts fixed points of contact with a line (or the
//! exceptional section) by order, `beta` counts moving ones, and the
//! secondary index is the node count (plane) or the geometric genus.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed before the first generation and shared read-only:
//! - Binomial coefficients and their products over profiles
//! - Partitions of every weight the run needs, in a fixed order
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Reset at the start of every run:
//! - Generation store holding the current and previous curve classes
//! - Diagnostics and statistics counters
//!
//! # Recurrence
//!
//! Each invariant is the sum of a tangency term (one moving contact becomes
//! fixed) and a reduction term (the curve degenerates into the divisor plus a
//! curve of the previous class). The first only reads the current
//! generation, the second only the previous one, so the store never holds
//! more than two generations.
//!
//! # References
//!
//! - Caporaso, L., Harris, J. (1998). "Counting plane curves of any genus."
//!   Invent. Math. 131, 345-392.
//! - Vakil, R. (2000). "Counting curves on rational surfaces."
//!   Manuscripta Math. 102, 53-84.

pub mod check;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod memo;
pub mod output;
pub mod sequence;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use config::{EngineConfig, EvaluationMode, OutputConfig, Pruning};
pub use context::EngineContext;
pub use engine::{Engine, GenerationObserver, GenerationView, RunSummary};
pub use errors::EngineError;
pub use sequence::Profile;
pub use state::InvariantKey;
pub use surface::{CurveClass, SurfaceSpec};
