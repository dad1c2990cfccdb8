// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable run state (Tier 2: DYNAMIC).

use crate::state::{Diagnostics, GenerationStore, Statistics};

/// Mutable run state (Tier 2: DYNAMIC).
///
/// Owned by exactly one engine. Memory stays bounded: the store never holds
/// more than two generations.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Previous and current generations.
    pub store: GenerationStore,

    /// Every problem reported so far.
    pub diagnostics: Diagnostics,

    /// Operation counters.
    pub statistics: Statistics,
}

impl DynamicState {
    pub fn new(max_recorded_diagnostics: usize) -> Self {
        Self {
            store: GenerationStore::new(),
            diagnostics: Diagnostics::new(max_recorded_diagnostics),
            statistics: Statistics::new(),
        }
    }

    /// Forget everything computed, keeping the diagnostic capacity.
    pub fn reset(&mut self) {
        self.store.clear();
        self.diagnostics.clear();
        self.statistics = Statistics::new();
    }
}
