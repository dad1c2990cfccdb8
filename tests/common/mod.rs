// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_bigint::BigInt;
use singular_curves::config::EngineConfig;
use singular_curves::engine::{Engine, GenerationObserver, GenerationView};
use singular_curves::errors::EngineError;
use singular_curves::sequence::Profile;
use singular_curves::state::{DiagnosticKind, InvariantKey};
use singular_curves::surface::{CurveClass, SurfaceSpec};
use std::collections::HashMap;

/// An observer that keeps a copy of every generation.
///
/// The engine itself only holds two generations; tests that look up values
/// across the whole run collect them here.
#[derive(Debug, Default)]
pub struct ValueCollector {
    pub values: HashMap<InvariantKey, BigInt>,
    pub slices: usize,
}

impl GenerationObserver for ValueCollector {
    fn on_slice(&mut self, _view: &GenerationView<'_>, _secondary: i32) -> Result<(), EngineError> {
        self.slices += 1;
        Ok(())
    }

    fn on_generation(&mut self, view: &GenerationView<'_>) -> Result<(), EngineError> {
        for secondary in view.secondary_window() {
            for (key, value) in view.entries(secondary) {
                self.values.insert(key, value.clone());
            }
        }
        Ok(())
    }
}

impl ValueCollector {
    /// Value of a key, panicking with the key if it was never computed.
    pub fn get(&self, key: &InvariantKey) -> i64 {
        let value = self
            .values
            .get(key)
            .unwrap_or_else(|| panic!("{} was not computed", key));
        i64::try_from(value).unwrap_or_else(|_| panic!("{} = {} overflows", key, value))
    }
}

/// Run `config` to completion and return every value with the engine.
pub fn collect(config: EngineConfig) -> (Engine, ValueCollector) {
    let mut engine = Engine::new(config).unwrap();
    let mut collector = ValueCollector::default();
    engine.run(&mut collector).unwrap();
    assert_eq!(
        engine.diagnostics().count(DiagnosticKind::MissingEntry),
        0,
        "{:?}",
        engine.diagnostics().records()
    );
    (engine, collector)
}

/// Zero-padded profile of length `len`.
pub fn p(len: usize, parts: &[u32]) -> Profile {
    Profile::from(parts).resized(len)
}

pub fn plane_key(degree: i32, nodes: i32, len: usize, alpha: &[u32], beta: &[u32]) -> InvariantKey {
    InvariantKey::new(
        CurveClass::Plane { degree },
        nodes,
        p(len, alpha),
        p(len, beta),
    )
}

pub fn quadric_key(a: i32, b: i32, genus: i32, alpha: &[u32], beta: &[u32]) -> InvariantKey {
    let len = b as usize;
    InvariantKey::new(CurveClass::Quadric { a, b }, genus, p(len, alpha), p(len, beta))
}

/// Key of the `i`-th class of a Hirzebruch run.
pub fn hirzebruch_key(
    surface: &SurfaceSpec,
    i: usize,
    genus: i32,
    alpha: &[u32],
    beta: &[u32],
) -> InvariantKey {
    let len = surface.profile_length();
    InvariantKey::new(surface.classes()[i], genus, p(len, alpha), p(len, beta))
}
