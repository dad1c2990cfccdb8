// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine context combining MEMO and DYNAMIC state.
//!
//! The EngineContext is the core data structure that combines:
//! - Tier 1 (MEMO): binomial and partition tables, immutable for the run
//! - Tier 2 (DYNAMIC): the generation store, diagnostics and counters
//!
//! Nothing is held in statics, so independent engines never contaminate each
//! other and several can share one [`MemoizedData`].

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::surface::SurfaceSpec;

/// Engine context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// EngineContext {
///     memo: MemoizedData,   // Tier 1: Immutable, shareable
///     state: DynamicState,  // Tier 2: Mutable, owned
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Mutable run state (Tier 2)
    pub state: DynamicState,
}

impl EngineContext {
    /// Create a context with freshly built MEMO data.
    pub fn new(surface: &SurfaceSpec, max_recorded_diagnostics: usize) -> Self {
        Self::with_memo(MemoizedData::new(surface), max_recorded_diagnostics)
    }

    /// Create a context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData, max_recorded_diagnostics: usize) -> Self {
        Self {
            memo,
            state: DynamicState::new(max_recorded_diagnostics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_context_new() {
        let ctx = EngineContext::new(
            &SurfaceSpec::Plane {
                max_degree: 3,
                max_nodes: 1,
            },
            8,
        );
        assert_eq!(ctx.memo.profile_len, 3);
        assert!(ctx.state.store.current().is_none());
        assert!(ctx.state.diagnostics.is_clean());
    }

    #[test]
    fn test_with_memo() {
        let surface = SurfaceSpec::Quadric {
            a: 2,
            b: 2,
            max_genus_drop: 0,
        };
        let memo = MemoizedData::new(&surface);
        let ctx1 = EngineContext::with_memo(memo.clone(), 4);
        let ctx2 = EngineContext::with_memo(memo, 4);
        assert_eq!(ctx1.memo.profile_len, ctx2.memo.profile_len);
    }
}
