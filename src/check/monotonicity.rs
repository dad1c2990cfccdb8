// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decrease check.
//!
//! For fixed class, secondary index and beta, invariants should not increase
//! as alpha walks the partitions of `target - I(beta)` in enumeration order.
//! The checker walks every finished generation and records each step where
//! the value goes up.

use crate::engine::{GenerationObserver, GenerationView};
use crate::errors::EngineError;
use crate::state::InvariantKey;
use num_bigint::BigInt;
use std::fmt;

/// A value larger than its predecessor in alpha order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonotonicityViolation {
    pub key: InvariantKey,
    pub value: BigInt,
    pub previous: InvariantKey,
    pub previous_value: BigInt,
}

impl fmt::Display for MonotonicityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} > {} = {}",
            self.key, self.value, self.previous, self.previous_value
        )
    }
}

/// Observer recording every monotonicity violation.
#[derive(Debug, Clone, Default)]
pub struct MonotonicityChecker {
    violations: Vec<MonotonicityViolation>,
    comparisons: u64,
}

impl MonotonicityChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> &[MonotonicityViolation] {
        &self.violations
    }

    /// Number of consecutive pairs compared.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check every slice of one generation.
    pub fn check(&mut self, view: &GenerationView<'_>) {
        let partitions = view.partitions();
        let class = view.class();
        let target = class.target_weight();
        for secondary in view.secondary_window() {
            for j in 0..=target {
                for beta in partitions.get(j) {
                    let mut last: Option<(InvariantKey, &BigInt)> = None;
                    for alpha in partitions.get(target - j) {
                        let Some(value) = view.get(secondary, alpha, beta) else {
                            continue;
                        };
                        let key = InvariantKey::new(class, secondary, alpha.clone(), beta.clone());
                        if let Some((previous, previous_value)) = last.take() {
                            self.comparisons += 1;
                            if value > previous_value {
                                tracing::warn!(violation = %key, value = %value, "value increased");
                                self.violations.push(MonotonicityViolation {
                                    key: key.clone(),
                                    value: value.clone(),
                                    previous,
                                    previous_value: previous_value.clone(),
                                });
                            }
                        }
                        last = Some((key, value));
                    }
                }
            }
        }
    }
}

impl GenerationObserver for MonotonicityChecker {
    fn on_generation(&mut self, view: &GenerationView<'_>) -> Result<(), EngineError> {
        tracing::info!(class = %view.class(), "checking decrease");
        self.check(view);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::Engine;
    use crate::surface::SurfaceSpec;

    #[test]
    fn test_small_plane_run_is_monotone() {
        let mut checker = MonotonicityChecker::new();
        let mut engine = Engine::new(EngineConfig::new(SurfaceSpec::Plane {
            max_degree: 4,
            max_nodes: 2,
        }))
        .unwrap();
        engine.run(&mut checker).unwrap();
        assert!(checker.comparisons() > 0);
        assert!(checker.is_clean(), "{:?}", checker.violations());
    }

    #[test]
    fn test_violation_display() {
        use crate::sequence::Profile;
        use crate::surface::CurveClass;

        let key = |alpha: Vec<u32>| {
            InvariantKey::new(
                CurveClass::Plane { degree: 2 },
                0,
                Profile::from(alpha),
                Profile::zeros(2),
            )
        };
        let violation = MonotonicityViolation {
            key: key(vec![0, 1]),
            value: BigInt::from(5),
            previous: key(vec![2, 0]),
            previous_value: BigInt::from(1),
        };
        assert_eq!(
            violation.to_string(),
            "N(O(2), 0, [0,1], [0,0]) = 5 > N(O(2), 0, [2,0], [0,0]) = 1"
        );
    }
}
