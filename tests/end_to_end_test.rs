// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{collect, p, plane_key};
use num_bigint::BigInt;
use singular_curves::config::{EngineConfig, EvaluationMode, OutputConfig};
use singular_curves::context::MemoizedData;
use singular_curves::engine::{Engine, GenerationObserver, GenerationView, NoopObserver};
use singular_curves::errors::{EngineError, InvariantError};
use singular_curves::output::FileSink;
use singular_curves::state::{DiagnosticKind, InvariantKey};
use singular_curves::surface::{CurveClass, SurfaceSpec};
use std::fs;

const CUBICS: SurfaceSpec = SurfaceSpec::Plane {
    max_degree: 3,
    max_nodes: 1,
};

#[test]
fn test_lines_through_a_fixed_point() {
    let (engine, values) = collect(EngineConfig::new(CUBICS));
    assert_eq!(values.get(&plane_key(1, 0, 3, &[1, 0, 0], &[])), 1);
    assert_eq!(values.get(&plane_key(1, 1, 3, &[1, 0, 0], &[])), 0);
    assert!(engine.diagnostics().is_clean());
}

#[test]
fn test_strict_run_is_clean() {
    let mut engine = Engine::new(EngineConfig::new(CUBICS).with_mode(EvaluationMode::Strict)).unwrap();
    let summary = engine.run(&mut NoopObserver).unwrap();
    assert_eq!(summary.generations, 3);
    assert_eq!(summary.entries_computed, 34);
    assert_eq!(summary.diagnostics, 0);
}

#[test]
fn test_rerun_resets_state() {
    let mut engine = Engine::new(EngineConfig::new(CUBICS)).unwrap();
    let first = engine.run(&mut NoopObserver).unwrap();
    let second = engine.run(&mut NoopObserver).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_requests_after_run() {
    let mut engine = Engine::new(EngineConfig::new(CUBICS)).unwrap();
    engine.run(&mut NoopObserver).unwrap();

    // Weight mismatch.
    let key = plane_key(3, 1, 3, &[1, 0, 0], &[1, 0, 0]);
    assert_eq!(engine.evaluate(&key), Ok(BigInt::from(0)));
    // Wrong profile length.
    let key = InvariantKey::new(CurveClass::Plane { degree: 3 }, 1, p(2, &[]), p(2, &[1, 1]));
    assert_eq!(engine.evaluate(&key), Ok(BigInt::from(0)));
    assert_eq!(engine.diagnostics().count(DiagnosticKind::InvalidRequest), 1);
    assert_eq!(engine.diagnostics().count(DiagnosticKind::LengthMismatch), 1);

    // A class from another surface.
    let key = InvariantKey::new(CurveClass::Quadric { a: 1, b: 3 }, 0, p(3, &[]), p(3, &[3]));
    let mut strict = Engine::new(EngineConfig::new(CUBICS).with_mode(EvaluationMode::Strict)).unwrap();
    assert_eq!(
        strict.evaluate(&key),
        Err(EngineError::Invalid(InvariantError::UnknownClass("O(1, 3)".to_string())))
    );
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let result = Engine::new(EngineConfig::new(SurfaceSpec::Plane {
        max_degree: 0,
        max_nodes: 1,
    }));
    assert!(matches!(result, Err(EngineError::Config(_))));

    let result = Engine::new(EngineConfig::new(SurfaceSpec::Quadric {
        a: 2,
        b: 2,
        max_genus_drop: -1,
    }));
    assert!(matches!(result, Err(EngineError::Config(_))));
}

#[test]
fn test_shared_memo_tables() {
    let memo = MemoizedData::new(&CUBICS);
    let mut engine = Engine::with_memo(EngineConfig::new(CUBICS), memo.clone()).unwrap();
    let summary = engine.run(&mut NoopObserver).unwrap();
    assert_eq!(summary.entries_computed, 34);

    let quartics = SurfaceSpec::Plane {
        max_degree: 4,
        max_nodes: 1,
    };
    assert!(matches!(
        Engine::with_memo(EngineConfig::new(quartics), memo),
        Err(EngineError::Config(_))
    ));
}

#[test]
fn test_memo_tables_too_small_for_surface() {
    // Same profile length as the cubics, partitions only up to weight 1.
    let memo = MemoizedData::new(&SurfaceSpec::Hirzebruch {
        n: 1,
        a: 1,
        b: 0,
        max_genus_drop: 1,
    });
    assert_eq!(memo.profile_len, CUBICS.profile_length());
    assert!(matches!(
        Engine::with_memo(EngineConfig::new(CUBICS), memo),
        Err(EngineError::Config(_))
    ));
}

struct FailAfterFirstGeneration;

impl GenerationObserver for FailAfterFirstGeneration {
    fn on_generation(&mut self, view: &GenerationView<'_>) -> Result<(), EngineError> {
        Err(EngineError::Output(format!("stop after {}", view.class())))
    }
}

#[test]
fn test_observer_error_aborts_run() {
    let mut engine = Engine::new(EngineConfig::new(CUBICS)).unwrap();
    let result = engine.run(&mut FailAfterFirstGeneration);
    assert_eq!(result, Err(EngineError::Output("stop after O(1)".to_string())));
    assert_eq!(engine.summary().generations, 1);
}

#[test]
fn test_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let surface = SurfaceSpec::Quadric {
        a: 2,
        b: 2,
        max_genus_drop: 1,
    };
    let config = OutputConfig::default().with_output_dir(dir.path()).with_print_last(1);
    let mut sink = FileSink::new(&surface, config);
    let mut engine = Engine::new(EngineConfig::new(surface)).unwrap();
    engine.run(&mut sink).unwrap();

    // O(2, 2) has arithmetic genus 1, so genera 0 and 1.
    assert_eq!(sink.written().len(), 4);
    let table = fs::read_to_string(dir.path().join("F0").join("O(2, 2)_g=0.txt")).unwrap();
    assert!(table.lines().any(|line| line == "N(O(2, 2), 0, [0,0], [2,0]) = 12"));
    assert_eq!(table.lines().count(), 5);

    let series = fs::read_to_string(dir.path().join("genFunF0").join("O(2, 2)_g=1.txt")).unwrap();
    assert!(series.ends_with("\n\n"));
    assert!(series.contains("alpha = [0,0]\n"));
}
