// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer trait for generation-by-generation consumers.
//!
//! The engine drives the recurrence; observers see each finished slice and
//! each finished generation through a read-only [`GenerationView`]. File
//! output and the monotonicity check are observers.
//!
//! # Example
//!
//! ```
//! use singular_curves::engine::{Engine, GenerationObserver, GenerationView};
//! use singular_curves::errors::EngineError;
//! use singular_curves::config::EngineConfig;
//! use singular_curves::surface::SurfaceSpec;
//!
//! struct CountEntries(usize);
//!
//! impl GenerationObserver for CountEntries {
//!     fn on_generation(&mut self, view: &GenerationView<'_>) -> Result<(), EngineError> {
//!         self.0 += view.len();
//!         Ok(())
//!     }
//! }
//!
//! let config = EngineConfig::new(SurfaceSpec::Plane { max_degree: 3, max_nodes: 1 });
//! let mut engine = Engine::new(config).unwrap();
//! let mut counter = CountEntries(0);
//! engine.run(&mut counter).unwrap();
//! assert_eq!(counter.0, 4 + 10 + 20);
//! ```

use crate::errors::EngineError;
use crate::memo::Partitions;
use crate::sequence::Profile;
use crate::state::{Generation, InvariantKey};
use crate::surface::{CurveClass, SurfaceSpec};
use num_bigint::BigInt;
use std::ops::RangeInclusive;

/// Read-only access to the generation being computed.
#[derive(Debug, Clone, Copy)]
pub struct GenerationView<'a> {
    surface: &'a SurfaceSpec,
    partitions: &'a Partitions,
    generation: &'a Generation,
}

impl<'a> GenerationView<'a> {
    pub(crate) fn new(surface: &'a SurfaceSpec, partitions: &'a Partitions, generation: &'a Generation) -> Self {
        Self {
            surface,
            partitions,
            generation,
        }
    }

    pub fn surface(&self) -> &'a SurfaceSpec {
        self.surface
    }

    pub fn class(&self) -> CurveClass {
        self.generation.class()
    }

    pub fn secondary_window(&self) -> RangeInclusive<i32> {
        self.surface.secondary_window(self.class())
    }

    /// The run's partition table, for scans in enumeration order.
    pub fn partitions(&self) -> &'a Partitions {
        self.partitions
    }

    /// Number of values stored so far.
    pub fn len(&self) -> usize {
        self.generation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation.is_empty()
    }

    pub fn get(&self, secondary: i32, alpha: &Profile, beta: &Profile) -> Option<&'a BigInt> {
        let key = InvariantKey::new(self.class(), secondary, alpha.clone(), beta.clone());
        self.generation.get(&key)
    }

    /// Stored entries of one secondary index, in computation order.
    pub fn entries(&self, secondary: i32) -> impl Iterator<Item = (InvariantKey, &'a BigInt)> + 'a {
        let generation = self.generation;
        slice_keys(self.partitions, self.class(), secondary)
            .filter_map(move |key| generation.get(&key).map(|value| (key, value)))
    }
}

/// Keys of one slice in computation order: `I(alpha)` from the target weight
/// down to 0, then alpha and beta in partition order.
pub(crate) fn slice_keys(
    partitions: &Partitions,
    class: CurveClass,
    secondary: i32,
) -> impl Iterator<Item = InvariantKey> + '_ {
    let target = class.target_weight();
    (0..=target).rev().flat_map(move |j| {
        partitions.get(j).iter().flat_map(move |alpha| {
            partitions
                .get(target - j)
                .iter()
                .map(move |beta| InvariantKey::new(class, secondary, alpha.clone(), beta.clone()))
        })
    })
}

/// Consumer of finished slices and generations.
///
/// Both callbacks default to doing nothing. An error aborts the run.
pub trait GenerationObserver {
    /// Every entry of `secondary` in the current generation is stored.
    fn on_slice(&mut self, _view: &GenerationView<'_>, _secondary: i32) -> Result<(), EngineError> {
        Ok(())
    }

    /// Every entry of the current generation is stored.
    fn on_generation(&mut self, _view: &GenerationView<'_>) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
