// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Surfaces and curve classes.
//!
//! One recurrence serves all three surfaces. What differs is a small set of
//! rules, dispatched here on [`SurfaceSpec`]:
//!
//! ```text
//!                    plane P^2             quadric F_0          Hirzebruch F_n
//! generations        d = 1..=D             O(i, b), i = 0..=a   ih + (b + n(a-i))f
//! target weight      d                     b                    b + n(a-i)
//! secondary index    nodes 0..=R           genus window         genus window
//! reduced secondary  r + |gamma| - d + 1   g - |gamma| + 1      g - |gamma| + 1
//! default split      weighted              weighted             dominance backtracking
//! ```

pub mod hirzebruch;
pub mod plane;
pub mod quadric;

use crate::engine::SplitStrategy;
use crate::errors::{EngineError, InvariantError};
use crate::state::InvariantKey;
use num_bigint::BigInt;
use std::fmt;
use std::ops::RangeInclusive;

/// The recursion index of one generation.
///
/// For Hirzebruch classes `a` and `b` are the coefficients of `ah + bf`; the
/// surface index `n` is fixed for a run and lives in [`SurfaceSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveClass {
    Plane { degree: i32 },
    Quadric { a: i32, b: i32 },
    Hirzebruch { a: i32, b: i32 },
}

impl CurveClass {
    /// Required `I(alpha) + I(beta)`.
    pub fn target_weight(&self) -> i64 {
        match *self {
            CurveClass::Plane { degree } => degree as i64,
            CurveClass::Quadric { b, .. } | CurveClass::Hirzebruch { b, .. } => b as i64,
        }
    }
}

impl fmt::Display for CurveClass {
    /// `O(3)`, `O(2, 3)` or `2h+3f`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveClass::Plane { degree } => write!(f, "O({})", degree),
            CurveClass::Quadric { a, b } => write!(f, "O({}, {})", a, b),
            CurveClass::Hirzebruch { a, b } => write!(f, "{}h+{}f", a, b),
        }
    }
}

/// A run's surface and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSpec {
    /// Degrees `1..=max_degree`, node counts `0..=max_nodes`.
    Plane { max_degree: i32, max_nodes: i32 },
    /// Classes `O(i, b)` for `i = 0..=a`; genera down to `g_a - max_genus_drop`.
    Quadric { a: i32, b: i32, max_genus_drop: i32 },
    /// Classes `ah + bf - (a - i)E` on `F_n` for `i = 0..=a`.
    Hirzebruch {
        n: i32,
        a: i32,
        b: i32,
        max_genus_drop: i32,
    },
}

impl SurfaceSpec {
    /// Reject bounds for which no base case is reachable.
    pub fn validate(&self) -> Result<(), EngineError> {
        let problem = match *self {
            SurfaceSpec::Plane { max_degree, max_nodes } => {
                if max_degree < 1 {
                    Some(format!("degree must be at least 1, got {}", max_degree))
                } else if max_nodes < 0 {
                    Some(format!("maximum node count can't be negative, got {}", max_nodes))
                } else {
                    None
                }
            }
            SurfaceSpec::Quadric { a, b, max_genus_drop } => {
                check_class(a, b, max_genus_drop)
            }
            SurfaceSpec::Hirzebruch {
                n,
                a,
                b,
                max_genus_drop,
            } => {
                if n < 0 {
                    Some(format!("Hirzebruch index can't be negative, got {}", n))
                } else {
                    check_class(a, b, max_genus_drop)
                }
            }
        };
        match problem {
            Some(message) => Err(EngineError::Config(message)),
            None => Ok(()),
        }
    }

    /// Output directory label: `CH`, `F0` or `Hir`.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceSpec::Plane { .. } => "CH",
            SurfaceSpec::Quadric { .. } => "F0",
            SurfaceSpec::Hirzebruch { .. } => "Hir",
        }
    }

    /// `r` for node counts, `g` for genera.
    pub fn secondary_symbol(&self) -> char {
        match self {
            SurfaceSpec::Plane { .. } => 'r',
            _ => 'g',
        }
    }

    /// Every generation of the run, in recursion order.
    pub fn classes(&self) -> Vec<CurveClass> {
        match *self {
            SurfaceSpec::Plane { max_degree, .. } => plane::degrees(max_degree)
                .map(|degree| CurveClass::Plane { degree })
                .collect(),
            SurfaceSpec::Quadric { a, b, .. } => {
                (0..=a).map(|i| CurveClass::Quadric { a: i, b }).collect()
            }
            SurfaceSpec::Hirzebruch { n, a, b, .. } => (0..=a)
                .map(|i| CurveClass::Hirzebruch {
                    a: i,
                    b: hirzebruch::fiber_component(n, a, b, i),
                })
                .collect(),
        }
    }

    /// Fixed length of every profile in the run.
    pub fn profile_length(&self) -> usize {
        match *self {
            SurfaceSpec::Plane { max_degree, .. } => max_degree.max(0) as usize,
            SurfaceSpec::Quadric { b, .. } => b.max(0) as usize,
            SurfaceSpec::Hirzebruch {
                n,
                a,
                b,
                max_genus_drop,
            } => hirzebruch::profile_length(n, a, b, max_genus_drop),
        }
    }

    /// Largest target weight of any generation.
    pub fn max_target_weight(&self) -> usize {
        match *self {
            SurfaceSpec::Plane { max_degree, .. } => max_degree.max(0) as usize,
            SurfaceSpec::Quadric { b, .. } => b.max(0) as usize,
            SurfaceSpec::Hirzebruch { n, a, b, .. } => {
                hirzebruch::fiber_component(n, a, b, 0).max(0) as usize
            }
        }
    }

    /// Arithmetic genus of a class; `None` on the plane.
    pub fn arithmetic_genus(&self, class: CurveClass) -> Option<i32> {
        match (*self, class) {
            (SurfaceSpec::Quadric { .. }, CurveClass::Quadric { a, b }) => {
                Some(quadric::arithmetic_genus(a, b))
            }
            (SurfaceSpec::Hirzebruch { n, .. }, CurveClass::Hirzebruch { a, b }) => {
                Some(hirzebruch::arithmetic_genus(n, a, b))
            }
            _ => None,
        }
    }

    /// Secondary indices stored for a class.
    pub fn secondary_window(&self, class: CurveClass) -> RangeInclusive<i32> {
        match *self {
            SurfaceSpec::Plane { max_nodes, .. } => plane::node_window(max_nodes),
            SurfaceSpec::Quadric { max_genus_drop, .. }
            | SurfaceSpec::Hirzebruch { max_genus_drop, .. } => {
                let genus = self.arithmetic_genus(class).unwrap_or_default();
                quadric::genus_window(genus, max_genus_drop)
            }
        }
    }

    /// The generation the reduction term reads, or `None` for the first one.
    pub fn previous_class(&self, class: CurveClass) -> Option<CurveClass> {
        match (*self, class) {
            (SurfaceSpec::Plane { .. }, CurveClass::Plane { degree }) if degree > 1 => {
                Some(CurveClass::Plane { degree: degree - 1 })
            }
            (SurfaceSpec::Quadric { .. }, CurveClass::Quadric { a, b }) if a > 0 => {
                Some(CurveClass::Quadric { a: a - 1, b })
            }
            (SurfaceSpec::Hirzebruch { n, .. }, CurveClass::Hirzebruch { a, b }) if a > 0 => {
                Some(CurveClass::Hirzebruch { a: a - 1, b: b + n })
            }
            _ => None,
        }
    }

    /// Admissibility gate.
    pub fn check_request(&self, key: &InvariantKey) -> Result<(), InvariantError> {
        match (*self, key.class) {
            (SurfaceSpec::Plane { .. }, CurveClass::Plane { degree }) => {
                plane::check_request(degree, key.secondary, &key.alpha, &key.beta)
            }
            (SurfaceSpec::Quadric { .. }, CurveClass::Quadric { a, b }) => {
                quadric::check_request(a, b, &key.alpha, &key.beta)
            }
            (SurfaceSpec::Hirzebruch { n, .. }, CurveClass::Hirzebruch { a, b }) => {
                hirzebruch::check_request(n, a, b, &key.alpha, &key.beta)
            }
            (_, class) => Err(InvariantError::UnknownClass(class.to_string())),
        }
    }

    /// Value of a base case, or `None` if the recurrence applies.
    pub fn base_case(&self, key: &InvariantKey) -> Option<BigInt> {
        match key.class {
            CurveClass::Plane { degree } => plane::base_case(degree, key.secondary),
            CurveClass::Quadric { a, b } | CurveClass::Hirzebruch { a, b } => {
                quadric::fiber_base_case(a, b, key.secondary, &key.alpha, &key.beta)
            }
        }
    }

    /// Secondary index of the reduction term's lookup.
    pub fn reduced_secondary(&self, class: CurveClass, secondary: i32, gamma_total: i64) -> i32 {
        match class {
            CurveClass::Plane { degree } => plane::reduced_nodes(degree, secondary, gamma_total),
            _ => quadric::reduced_genus(secondary, gamma_total),
        }
    }

    /// Range of `|gamma|` whose reduced secondary index lands in the previous
    /// generation's window. Empty (`lo > hi`) when nothing can contribute.
    pub fn gamma_total_bounds(&self, class: CurveClass, secondary: i32) -> Option<(i64, i64)> {
        let previous = self.previous_class(class)?;
        Some(match (*self, class) {
            (SurfaceSpec::Plane { max_nodes, .. }, CurveClass::Plane { degree }) => {
                plane::gamma_total_bounds(degree, secondary, max_nodes)
            }
            _ => quadric::gamma_total_bounds(secondary, &self.secondary_window(previous)),
        })
    }

    /// Outer loop shape of the reduction term when not overridden.
    pub fn default_split(&self) -> SplitStrategy {
        match self {
            SurfaceSpec::Hirzebruch { .. } => SplitStrategy::DominanceBacktrack,
            _ => SplitStrategy::WeightedSplit,
        }
    }
}

fn check_class(a: i32, b: i32, max_genus_drop: i32) -> Option<String> {
    if a < 0 || b < 0 {
        Some(format!("curve class ({}, {}) has a negative component", a, b))
    } else if max_genus_drop < 0 {
        Some(format!("genus drop can't be negative, got {}", max_genus_drop))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Profile;

    #[test]
    fn test_class_display() {
        assert_eq!(CurveClass::Plane { degree: 3 }.to_string(), "O(3)");
        assert_eq!(CurveClass::Quadric { a: 2, b: 3 }.to_string(), "O(2, 3)");
        assert_eq!(CurveClass::Hirzebruch { a: 2, b: 3 }.to_string(), "2h+3f");
    }

    #[test]
    fn test_plane_generations() {
        let surface = SurfaceSpec::Plane {
            max_degree: 3,
            max_nodes: 1,
        };
        let classes = surface.classes();
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[0], CurveClass::Plane { degree: 1 });
        assert_eq!(surface.previous_class(classes[0]), None);
        assert_eq!(surface.previous_class(classes[2]), Some(classes[1]));
        assert_eq!(surface.profile_length(), 3);
        assert_eq!(surface.secondary_window(classes[2]), 0..=1);
        assert_eq!(surface.default_split(), SplitStrategy::WeightedSplit);
    }

    #[test]
    fn test_hirzebruch_generations() {
        let surface = SurfaceSpec::Hirzebruch {
            n: 1,
            a: 2,
            b: 1,
            max_genus_drop: 1,
        };
        let classes = surface.classes();
        assert_eq!(
            classes,
            vec![
                CurveClass::Hirzebruch { a: 0, b: 3 },
                CurveClass::Hirzebruch { a: 1, b: 2 },
                CurveClass::Hirzebruch { a: 2, b: 1 },
            ]
        );
        assert_eq!(surface.previous_class(classes[2]), Some(classes[1]));
        assert_eq!(surface.profile_length(), 5);
        assert_eq!(surface.max_target_weight(), 3);
        // g_a(h + 2f) on F_1 is 0.
        assert_eq!(surface.secondary_window(classes[1]), -1..=0);
        assert_eq!(surface.default_split(), SplitStrategy::DominanceBacktrack);
    }

    #[test]
    fn test_quadric_gamma_bounds() {
        let surface = SurfaceSpec::Quadric {
            a: 3,
            b: 2,
            max_genus_drop: 2,
        };
        let class = CurveClass::Quadric { a: 2, b: 2 };
        // Previous window is g_a(1, 2) - 2 ..= g_a(1, 2), i.e. -2..=0.
        assert_eq!(surface.gamma_total_bounds(class, 1), Some((2, 4)));
        assert_eq!(surface.gamma_total_bounds(CurveClass::Quadric { a: 0, b: 2 }, 0), None);
    }

    #[test]
    fn test_unknown_class_is_rejected() {
        let surface = SurfaceSpec::Quadric {
            a: 1,
            b: 1,
            max_genus_drop: 0,
        };
        let key = InvariantKey::new(
            CurveClass::Plane { degree: 1 },
            0,
            Profile::from(vec![1]),
            Profile::zeros(1),
        );
        assert!(matches!(
            surface.check_request(&key),
            Err(InvariantError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(SurfaceSpec::Plane {
            max_degree: 0,
            max_nodes: 0
        }
        .validate()
        .is_err());
        assert!(SurfaceSpec::Hirzebruch {
            n: -1,
            a: 1,
            b: 1,
            max_genus_drop: 0
        }
        .validate()
        .is_err());
        assert!(SurfaceSpec::Quadric {
            a: 2,
            b: 2,
            max_genus_drop: 1
        }
        .validate()
        .is_ok());
    }
}
