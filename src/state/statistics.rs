// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics and diagnostics
//!
//! Operation counters are incremented by the engine as it runs. Diagnostics
//! are the observable record of every contract violation the lenient policy
//! degraded to zero instead of aborting.

use crate::errors::{EngineError, InvariantError, ProfileError, Term};
use crate::state::InvariantKey;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    EntriesComputed,
    TangencyLookups,
    ReductionLookups,
    Generations,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Class of a reported problem.
#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum DiagnosticKind {
    LengthMismatch,
    Dominance,
    Range,
    InvalidRequest,
    MissingEntry,
}

/// One reported problem with its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Invariant being evaluated when the problem occurred.
    pub requested: Option<InvariantKey>,
    /// Key that could not be found, for `MissingEntry`.
    pub missing: Option<InvariantKey>,
    pub message: String,
}

impl Diagnostic {
    pub fn from_profile_error(error: &ProfileError, requested: Option<&InvariantKey>) -> Self {
        let kind = match error {
            ProfileError::LengthMismatch { .. } => DiagnosticKind::LengthMismatch,
            ProfileError::NotDominating { .. } => DiagnosticKind::Dominance,
            ProfileError::OutOfTableRange { .. } => DiagnosticKind::Range,
        };
        Self {
            kind,
            requested: requested.cloned(),
            missing: None,
            message: error.to_string(),
        }
    }

    pub fn from_invalid_request(error: &InvariantError, requested: &InvariantKey) -> Self {
        Self {
            kind: DiagnosticKind::InvalidRequest,
            requested: Some(requested.clone()),
            missing: None,
            message: error.to_string(),
        }
    }

    pub fn missing_entry(requested: &InvariantKey, missing: &InvariantKey, term: Term) -> Self {
        Self {
            kind: DiagnosticKind::MissingEntry,
            requested: Some(requested.clone()),
            missing: Some(missing.clone()),
            message: format!("{} can't be found ({})", missing, term),
        }
    }

    /// The error strict mode raises for this diagnostic.
    pub fn to_error(&self, term: Term) -> EngineError {
        match (&self.requested, &self.missing) {
            (Some(requested), Some(missing)) => EngineError::MissingEntry {
                requested: requested.clone(),
                missing: missing.clone(),
                term,
            },
            _ => EngineError::Config(self.message.clone()),
        }
    }
}

/// Counts of every diagnostic plus the first few full records.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    counts: [u64; DiagnosticKind::COUNT],
    records: Vec<Diagnostic>,
    max_recorded: usize,
}

impl Diagnostics {
    pub fn new(max_recorded: usize) -> Self {
        Self {
            counts: [0; DiagnosticKind::COUNT],
            records: Vec::new(),
            max_recorded,
        }
    }

    /// Count a diagnostic, log it, and keep it if there is room.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.counts[diagnostic.kind as usize] += 1;
        match &diagnostic.requested {
            Some(requested) => tracing::warn!(
                kind = %diagnostic.kind,
                requested = %requested,
                "{}",
                diagnostic.message
            ),
            None => tracing::warn!(kind = %diagnostic.kind, "{}", diagnostic.message),
        }
        if self.records.len() < self.max_recorded {
            self.records.push(diagnostic);
        }
    }

    pub fn count(&self, kind: DiagnosticKind) -> u64 {
        self.counts[kind as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Recorded diagnostics, oldest first.
    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.counts = [0; DiagnosticKind::COUNT];
        self.records.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(64)
    }
}
