// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two-term recurrence.
//!
//! For an admissible non-base request `N(class, s, alpha, beta)`:
//!
//! ```text
//! N = sum_k (k+1) N(class, s, alpha + e_k, beta - e_k)                      [tangency]
//!   + sum     gamma^gamma C(alpha, alpha') C(beta', beta) N(prev, s', alpha', beta')   [reduction]
//! ```
//!
//! The tangency term reads the current generation, the reduction term the
//! previous one. Every missing key or out-of-contract operand is handed to
//! the [`Reporter`], which either records it (the term contributes zero) or
//! turns it into an error.

use crate::config::{EvaluationMode, Pruning};
use crate::context::MemoizedData;
use crate::engine::split::{for_each_split, SplitRequest, SplitStrategy};
use crate::errors::{EngineError, ProfileError, Term};
use crate::sequence::Profile;
use crate::state::{Counters, Diagnostic, Diagnostics, GenerationStore, InvariantKey, Statistics};
use crate::surface::{CurveClass, SurfaceSpec};
use num_bigint::BigInt;
use num_traits::Zero;

/// Applies the evaluation mode to reported problems.
pub(crate) struct Reporter<'a> {
    pub mode: EvaluationMode,
    pub diagnostics: &'a mut Diagnostics,
    pub statistics: &'a mut Statistics,
}

impl Reporter<'_> {
    fn report(&mut self, diagnostic: Diagnostic, error: EngineError) -> Result<(), EngineError> {
        self.diagnostics.report(diagnostic);
        match self.mode {
            EvaluationMode::Lenient => Ok(()),
            EvaluationMode::Strict => Err(error),
        }
    }

    fn profile_error(&mut self, error: ProfileError, requested: &InvariantKey) -> Result<(), EngineError> {
        let diagnostic = Diagnostic::from_profile_error(&error, Some(requested));
        self.report(diagnostic, error.into())
    }

    fn missing(&mut self, requested: &InvariantKey, missing: &InvariantKey, term: Term) -> Result<(), EngineError> {
        let diagnostic = Diagnostic::missing_entry(requested, missing, term);
        let error = diagnostic.to_error(term);
        self.report(diagnostic, error)
    }
}

/// Read-only view of everything one evaluation needs.
pub(crate) struct Recurrence<'a> {
    pub surface: &'a SurfaceSpec,
    pub memo: &'a MemoizedData,
    pub store: &'a GenerationStore,
    pub split: SplitStrategy,
    pub pruning: Pruning,
}

impl Recurrence<'_> {
    pub fn evaluate(&self, key: &InvariantKey, reporter: &mut Reporter<'_>) -> Result<BigInt, EngineError> {
        for profile in [&key.alpha, &key.beta] {
            if let Err(error) = self.memo.check_length(profile) {
                reporter.profile_error(error, key)?;
                return Ok(BigInt::zero());
            }
        }
        if let Err(error) = self.surface.check_request(key) {
            let sentinel = error.sentinel();
            reporter.report(Diagnostic::from_invalid_request(&error, key), error.into())?;
            return Ok(BigInt::from(sentinel));
        }
        if let Some(value) = self.surface.base_case(key) {
            return Ok(value);
        }

        let mut total = self.tangency_term(key, reporter)?;
        if let Some(previous) = self.surface.previous_class(key.class) {
            total += self.reduction_term(key, previous, reporter)?;
        }
        Ok(total)
    }

    /// Move one unassigned tangency of order `k+1` to an assigned point.
    fn tangency_term(&self, key: &InvariantKey, reporter: &mut Reporter<'_>) -> Result<BigInt, EngineError> {
        let mut total = BigInt::zero();
        for k in 0..key.beta.len() {
            let Some((alpha, beta)) = key.beta.transfer_unit(&key.alpha, k) else {
                continue;
            };
            let lookup = InvariantKey::new(key.class, key.secondary, alpha, beta);
            reporter.statistics.increment(Counters::TangencyLookups);
            match self.store.lookup_current(&lookup) {
                Some(value) => total += value * BigInt::from(k + 1),
                None => reporter.missing(key, &lookup, Term::Tangency)?,
            }
        }
        Ok(total)
    }

    /// Degenerate to the previous generation.
    fn reduction_term(
        &self,
        key: &InvariantKey,
        previous: CurveClass,
        reporter: &mut Reporter<'_>,
    ) -> Result<BigInt, EngineError> {
        let gamma_total = match self.pruning {
            Pruning::Derived => self.surface.gamma_total_bounds(key.class, key.secondary),
            Pruning::Exhaustive => None,
        };
        let request = SplitRequest {
            alpha: &key.alpha,
            beta: &key.beta,
            previous_weight: previous.target_weight(),
            gamma_total,
        };
        let window = self.surface.secondary_window(previous);

        let mut total = BigInt::zero();
        for_each_split(self.split, &self.memo.partitions, &request, |a_prev, b_prev, gamma| {
            let secondary = self
                .surface
                .reduced_secondary(key.class, key.secondary, gamma.total());
            if !window.contains(&secondary) {
                return Ok(());
            }
            let lookup = InvariantKey::new(previous, secondary, a_prev.clone(), b_prev.clone());
            reporter.statistics.increment(Counters::ReductionLookups);
            let Some(value) = self.store.lookup_previous(&lookup) else {
                return reporter.missing(key, &lookup, Term::Reduction);
            };
            match self.coefficient(&key.alpha, a_prev, b_prev, &key.beta, gamma) {
                Ok(coefficient) => {
                    total += coefficient * value;
                    Ok(())
                }
                Err(error) => reporter.profile_error(error, key),
            }
        })?;
        Ok(total)
    }

    /// `gamma^gamma * C(alpha, alpha') * C(beta', beta)`.
    fn coefficient(
        &self,
        alpha: &Profile,
        a_prev: &Profile,
        b_prev: &Profile,
        beta: &Profile,
        gamma: &Profile,
    ) -> Result<BigInt, ProfileError> {
        let binomials = &self.memo.binomials;
        Ok(gamma.product_power()
            * binomials.vector_binomial(alpha, a_prev)?
            * binomials.vector_binomial(b_prev, beta)?)
    }
}
