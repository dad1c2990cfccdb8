// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Windowed memo of computed invariants.
//!
//! At most two generations are alive: the previous one (read by the reduction
//! term) and the current one (read by the tangency term while it is being
//! filled). The current generation is split into two sub-stores:
//!
//! - `pending`: the secondary-index slice being computed right now
//! - `settled`: earlier slices of the same generation, promoted when the
//!   driver moves on to the next secondary index
//!
//! Tangency lookups probe both, so a key is found whether or not its slice has
//! been promoted. Advancing retires the previous generation entirely; full
//! history is never kept.

use crate::state::InvariantKey;
use crate::surface::CurveClass;
use num_bigint::BigInt;
use rustc_hash::FxHashMap;

type Table = FxHashMap<InvariantKey, BigInt>;

/// Values of one curve class, split into settled and pending slices.
#[derive(Debug, Clone)]
pub struct Generation {
    class: CurveClass,
    settled: Table,
    pending: Table,
    pending_secondary: Option<i32>,
}

impl Generation {
    fn new(class: CurveClass) -> Self {
        Self {
            class,
            settled: Table::default(),
            pending: Table::default(),
            pending_secondary: None,
        }
    }

    pub fn class(&self) -> CurveClass {
        self.class
    }

    /// Look up a key in the pending slice first, then the settled ones.
    pub fn get(&self, key: &InvariantKey) -> Option<&BigInt> {
        self.pending.get(key).or_else(|| self.settled.get(key))
    }

    /// Secondary index of the slice currently pending, if any.
    pub fn pending_secondary(&self) -> Option<i32> {
        self.pending_secondary
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn promote(&mut self) {
        if self.settled.is_empty() {
            std::mem::swap(&mut self.settled, &mut self.pending);
        } else {
            self.settled.extend(self.pending.drain());
        }
        self.pending_secondary = None;
    }
}

/// Holds the previous and current generations.
#[derive(Debug, Clone, Default)]
pub struct GenerationStore {
    previous: Option<Generation>,
    current: Option<Generation>,
}

impl GenerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire the previous generation, promote the current one to previous,
    /// and start an empty generation for `class`.
    pub fn advance(&mut self, class: CurveClass) {
        if let Some(current) = self.current.as_mut() {
            current.promote();
        }
        self.previous = self.current.take();
        self.current = Some(Generation::new(class));
    }

    /// Promote the pending slice and open a new one for `secondary`.
    ///
    /// # Panics
    ///
    /// Panics if no generation has been started.
    pub fn begin_slice(&mut self, secondary: i32) {
        let current = self
            .current
            .as_mut()
            .expect("begin_slice called before advance");
        current.promote();
        current.pending_secondary = Some(secondary);
    }

    /// Store a freshly computed value in the pending slice.
    ///
    /// # Panics
    ///
    /// Panics if no generation has been started.
    pub fn insert(&mut self, key: InvariantKey, value: BigInt) {
        let current = self.current.as_mut().expect("insert called before advance");
        debug_assert_eq!(key.class, current.class, "key belongs to another generation");
        current.pending.insert(key, value);
    }

    /// Look up a key of the generation being computed.
    pub fn lookup_current(&self, key: &InvariantKey) -> Option<&BigInt> {
        self.current.as_ref().and_then(|g| g.get(key))
    }

    /// Look up a key of the previous generation.
    pub fn lookup_previous(&self, key: &InvariantKey) -> Option<&BigInt> {
        self.previous.as_ref().and_then(|g| g.get(key))
    }

    pub fn current(&self) -> Option<&Generation> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Generation> {
        self.previous.as_ref()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.previous = None;
        self.current = None;
    }
}
