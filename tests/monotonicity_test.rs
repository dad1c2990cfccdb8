// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use singular_curves::check::MonotonicityChecker;
use singular_curves::config::EngineConfig;
use singular_curves::engine::Engine;
use singular_curves::surface::SurfaceSpec;

#[test]
fn test_plane_quintics_decrease_along_alpha() {
    let mut engine = Engine::new(EngineConfig::new(SurfaceSpec::Plane {
        max_degree: 5,
        max_nodes: 3,
    }))
    .unwrap();
    let mut checker = MonotonicityChecker::new();
    let summary = engine.run(&mut checker).unwrap();

    assert_eq!(summary.diagnostics, 0);
    assert_eq!(checker.comparisons(), 116);
    assert!(checker.is_clean(), "{:?}", checker.violations());
}

#[test]
fn test_checker_accumulates_across_runs() {
    let surface = SurfaceSpec::Plane {
        max_degree: 4,
        max_nodes: 2,
    };
    let mut checker = MonotonicityChecker::new();
    for _ in 0..2 {
        let mut engine = Engine::new(EngineConfig::new(surface)).unwrap();
        engine.run(&mut checker).unwrap();
    }
    assert_eq!(checker.comparisons(), 2 * 36);
    assert!(checker.is_clean());
}
