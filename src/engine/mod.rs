// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation-by-generation evaluation engine.
//!
//! The engine owns the context (binomial and partition tables, generation
//! store, diagnostics) and drives the recurrence over every admissible
//! invariant of a run.
//!
//! # Execution order
//!
//! 1. Generations in recursion order (degree, or the `h` coefficient).
//! 2. Within a generation, secondary indices ascending. Each index is a
//!    slice: it only reads itself and the previous generation.
//! 3. Within a slice, `I(alpha)` descending, then alpha and beta in partition
//!    order. The tangency term always reads a heavier alpha, so its source is
//!    already stored.
//!
//! After each slice and each generation the observer is called. The store
//! only ever holds two generations.
//!
//! # Example
//!
//! ```
//! use singular_curves::config::EngineConfig;
//! use singular_curves::engine::{Engine, NoopObserver};
//! use singular_curves::sequence::Profile;
//! use singular_curves::state::InvariantKey;
//! use singular_curves::surface::{CurveClass, SurfaceSpec};
//!
//! let config = EngineConfig::new(SurfaceSpec::Plane { max_degree: 3, max_nodes: 1 });
//! let mut engine = Engine::new(config).unwrap();
//! let summary = engine.run(&mut NoopObserver).unwrap();
//! assert_eq!(summary.generations, 3);
//! assert_eq!(summary.diagnostics, 0);
//!
//! // Twelve nodal cubics through eight points.
//! let key = InvariantKey::new(
//!     CurveClass::Plane { degree: 3 },
//!     1,
//!     Profile::zeros(3),
//!     Profile::from(vec![3, 0, 0]),
//! );
//! assert_eq!(engine.value(&key), Some(&num_bigint::BigInt::from(12)));
//! ```

mod observer;
mod recurrence;
mod split;

pub use observer::{GenerationObserver, GenerationView, NoopObserver};
pub use split::SplitStrategy;

use crate::config::EngineConfig;
use crate::context::{EngineContext, MemoizedData};
use crate::errors::EngineError;
use crate::state::{Counters, Diagnostics, InvariantKey, Statistics};
use crate::surface::SurfaceSpec;
use num_bigint::BigInt;
use observer::slice_keys;
use recurrence::{Recurrence, Reporter};
use std::fmt;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub entries_computed: u64,
    pub tangency_lookups: u64,
    pub reduction_lookups: u64,
    /// Diagnostics of every kind.
    pub diagnostics: u64,
}

impl RunSummary {
    fn collect(statistics: &Statistics, diagnostics: &Diagnostics) -> Self {
        Self {
            generations: statistics.get(Counters::Generations),
            entries_computed: statistics.get(Counters::EntriesComputed),
            tangency_lookups: statistics.get(Counters::TangencyLookups),
            reduction_lookups: statistics.get(Counters::ReductionLookups),
            diagnostics: diagnostics.total(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generations:        {}", self.generations)?;
        writeln!(f, "Entries computed:   {}", self.entries_computed)?;
        writeln!(f, "Tangency lookups:   {}", self.tangency_lookups)?;
        writeln!(f, "Reduction lookups:  {}", self.reduction_lookups)?;
        write!(f, "Diagnostics:        {}", self.diagnostics)
    }
}

/// Evaluation engine for one surface.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    ctx: EngineContext,
}

impl Engine {
    /// Validate the configuration and build the MEMO tables.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let ctx = EngineContext::new(&config.surface, config.max_recorded_diagnostics);
        Ok(Self { config, ctx })
    }

    /// Build an engine around existing MEMO tables of the same surface.
    pub fn with_memo(config: EngineConfig, memo: MemoizedData) -> Result<Self, EngineError> {
        config.validate()?;
        if !memo.covers(&config.surface) {
            return Err(EngineError::Config(format!(
                "MEMO tables (profile length {}, weights up to {}, binomials up to {}) \
                 do not cover profile length {} and weight {}",
                memo.profile_len,
                memo.partitions.max_weight(),
                memo.binomials.bound(),
                config.surface.profile_length(),
                config.surface.max_target_weight()
            )));
        }
        let ctx = EngineContext::with_memo(memo, config.max_recorded_diagnostics);
        Ok(Self { config, ctx })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &SurfaceSpec {
        &self.config.surface
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.ctx.state.diagnostics
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.state.statistics
    }

    /// Evaluate one invariant against the generations currently held.
    ///
    /// Inadmissible requests yield their sentinel (0, -2 or -3) in lenient
    /// mode and [`EngineError::Invalid`] in strict mode; either way a
    /// diagnostic is recorded.
    pub fn evaluate(&mut self, key: &InvariantKey) -> Result<BigInt, EngineError> {
        let EngineContext { memo, state } = &mut self.ctx;
        let recurrence = Recurrence {
            surface: &self.config.surface,
            memo,
            store: &state.store,
            split: self.config.split_strategy(),
            pruning: self.config.pruning,
        };
        let mut reporter = Reporter {
            mode: self.config.mode,
            diagnostics: &mut state.diagnostics,
            statistics: &mut state.statistics,
        };
        recurrence.evaluate(key, &mut reporter)
    }

    /// Compute every generation, notifying `observer` as slices complete.
    ///
    /// Any earlier results, diagnostics and counters are discarded first.
    pub fn run(&mut self, observer: &mut dyn GenerationObserver) -> Result<RunSummary, EngineError> {
        self.ctx.state.reset();
        let surface = self.config.surface;

        for class in surface.classes() {
            self.ctx.state.store.advance(class);
            tracing::info!(class = %class, "computing generation");

            for secondary in surface.secondary_window(class) {
                self.ctx.state.store.begin_slice(secondary);
                let keys: Vec<InvariantKey> =
                    slice_keys(&self.ctx.memo.partitions, class, secondary).collect();
                for key in keys {
                    let value = self.evaluate(&key)?;
                    self.ctx.state.statistics.increment(Counters::EntriesComputed);
                    self.ctx.state.store.insert(key, value);
                }
                tracing::debug!(
                    class = %class,
                    secondary,
                    entries = self.ctx.state.store.current().map_or(0, |g| g.pending_len()),
                    "slice complete"
                );
                if let Some(view) = self.view() {
                    observer.on_slice(&view, secondary)?;
                }
            }

            self.ctx.state.statistics.increment(Counters::Generations);
            if let Some(view) = self.view() {
                observer.on_generation(&view)?;
            }
        }

        let summary = self.summary();
        tracing::info!(
            generations = summary.generations,
            entries = summary.entries_computed,
            diagnostics = summary.diagnostics,
            "run complete"
        );
        Ok(summary)
    }

    /// Counters of the latest run.
    pub fn summary(&self) -> RunSummary {
        RunSummary::collect(&self.ctx.state.statistics, &self.ctx.state.diagnostics)
    }

    /// The generation being computed, or the last one after a run.
    pub fn view(&self) -> Option<GenerationView<'_>> {
        self.ctx
            .state
            .store
            .current()
            .map(|generation| GenerationView::new(&self.config.surface, &self.ctx.memo.partitions, generation))
    }

    /// Stored value of a key in the current or previous generation.
    pub fn value(&self, key: &InvariantKey) -> Option<&BigInt> {
        let store = &self.ctx.state.store;
        store.lookup_current(key).or_else(|| store.lookup_previous(key))
    }

    /// Entries of one secondary index of the current generation, in
    /// computation order.
    pub fn generation_entries(&self, secondary: i32) -> Vec<(InvariantKey, BigInt)> {
        self.view()
            .map(|view| {
                view.entries(secondary)
                    .map(|(key, value)| (key, value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
