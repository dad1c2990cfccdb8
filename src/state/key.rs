// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structured lookup key for computed invariants.

use crate::sequence::Profile;
use crate::surface::CurveClass;
use std::fmt;

/// Identifies one invariant `N(class, secondary, alpha, beta)`.
///
/// `secondary` is the node count on the plane and the geometric genus on the
/// other surfaces. Profiles have the run's fixed length, so value equality on
/// the whole struct never conflates distinct invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvariantKey {
    pub class: CurveClass,
    pub secondary: i32,
    pub alpha: Profile,
    pub beta: Profile,
}

impl InvariantKey {
    pub fn new(class: CurveClass, secondary: i32, alpha: Profile, beta: Profile) -> Self {
        Self {
            class,
            secondary,
            alpha,
            beta,
        }
    }
}

impl fmt::Display for InvariantKey {
    /// Format as `N(O(3), 1, [0,0,0], [3,0,0])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N({}, {}, {}, {})",
            self.class, self.secondary, self.alpha, self.beta
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        let key = InvariantKey::new(
            CurveClass::Plane { degree: 3 },
            1,
            Profile::zeros(3),
            Profile::from(vec![3, 0, 0]),
        );
        assert_eq!(key.to_string(), "N(O(3), 1, [0,0,0], [3,0,0])");
    }

    #[test]
    fn test_no_collision_between_fields() {
        // Flat concatenation would make these two identical.
        let a = InvariantKey::new(
            CurveClass::Plane { degree: 2 },
            0,
            Profile::from(vec![1, 0]),
            Profile::from(vec![0, 0]),
        );
        let b = InvariantKey::new(
            CurveClass::Plane { degree: 2 },
            0,
            Profile::from(vec![1]),
            Profile::from(vec![0, 0, 0]),
        );
        let c = InvariantKey::new(
            CurveClass::Quadric { a: 2, b: 0 },
            0,
            Profile::from(vec![1, 0]),
            Profile::from(vec![0, 0]),
        );
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 3);
    }
}
