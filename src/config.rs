// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! # Example
//!
//! ```
//! use singular_curves::config::{EngineConfig, EvaluationMode};
//! use singular_curves::surface::SurfaceSpec;
//!
//! let config = EngineConfig::new(SurfaceSpec::Plane { max_degree: 4, max_nodes: 3 })
//!     .with_mode(EvaluationMode::Strict);
//! assert!(config.validate().is_ok());
//! ```

use crate::engine::SplitStrategy;
use crate::errors::EngineError;
use crate::surface::SurfaceSpec;
use std::path::PathBuf;

/// What happens when a diagnostic is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// Record the diagnostic, count the affected contribution as zero, keep going.
    #[default]
    Lenient,
    /// Abort the run with the first diagnostic as an error.
    Strict,
}

/// Range of the reduction term's outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Only enumerate splits whose `|gamma|` can land in the previous window.
    #[default]
    Derived,
    /// Enumerate every split; used as the reference evaluator.
    Exhaustive,
}

/// Configuration of one [`crate::engine::Engine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub surface: SurfaceSpec,
    pub mode: EvaluationMode,
    pub pruning: Pruning,
    /// Forces a split strategy instead of the surface default.
    pub split: Option<SplitStrategy>,
    /// Full diagnostic records kept; counts are always complete.
    pub max_recorded_diagnostics: usize,
}

impl EngineConfig {
    pub fn new(surface: SurfaceSpec) -> Self {
        Self {
            surface,
            mode: EvaluationMode::default(),
            pruning: Pruning::default(),
            split: None,
            max_recorded_diagnostics: 64,
        }
    }

    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_split(mut self, split: SplitStrategy) -> Self {
        self.split = Some(split);
        self
    }

    pub fn with_max_recorded_diagnostics(mut self, max: usize) -> Self {
        self.max_recorded_diagnostics = max;
        self
    }

    /// The split strategy in effect.
    pub fn split_strategy(&self) -> SplitStrategy {
        self.split.unwrap_or_else(|| self.surface.default_split())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.surface.validate()
    }
}

/// Where and how much of a run is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Root directory; surface subdirectories are created below it.
    pub output_dir: PathBuf,
    /// Number of final generations written to files.
    pub print_last: usize,
    /// Generating series terms keep betas with `I(beta) - beta[0]` up to this.
    pub series_weight: i64,
    /// Only alphas with `I(alpha)` up to this get a generating series block.
    pub series_alpha_weight: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            print_last: 5,
            series_weight: 10,
            series_alpha_weight: 4,
        }
    }
}

impl OutputConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_print_last(mut self, print_last: usize) -> Self {
        self.print_last = print_last;
        self
    }

    pub fn with_series_weight(mut self, weight: i64) -> Self {
        self.series_weight = weight;
        self
    }
}
