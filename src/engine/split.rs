// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outer loop of the reduction term.
//!
//! The reduction term sums over pairs `(alpha', beta')` of the previous
//! generation with `alpha' <= alpha`, `beta' >= beta` and
//! `I(alpha') + I(beta') = D'`, the previous target weight. Writing
//! `gamma = beta' - beta`, two loop shapes visit exactly the same pairs:
//!
//! - [`SplitStrategy::WeightedSplit`]: iterate `j = I(beta')` upwards, then
//!   `beta'` over the partitions of `j` and `alpha'` over those of `D' - j`,
//!   keeping dominating pairs.
//! - [`SplitStrategy::DominanceBacktrack`]: backtrack over every `alpha'`
//!   below `alpha`, then over every `gamma` of the remaining weight, and set
//!   `beta' = beta + gamma`.
//!
//! Given bounds `lo..=hi` on `|gamma|`, the weighted split starts at
//! `j = I(beta) + max(lo, 0)` (since `I(gamma) >= |gamma|`) and the
//! backtracking never places more than `hi` units in `gamma`.

use crate::errors::EngineError;
use crate::memo::Partitions;
use crate::sequence::Profile;

/// Loop shape of the reduction term. Both give identical sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    WeightedSplit,
    DominanceBacktrack,
}

/// Inputs of one reduction-term enumeration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitRequest<'a> {
    pub alpha: &'a Profile,
    pub beta: &'a Profile,
    /// Target weight of the previous generation.
    pub previous_weight: i64,
    /// Admissible `|gamma|`; `None` enumerates every split.
    pub gamma_total: Option<(i64, i64)>,
}

type Visit<'v> = dyn FnMut(&Profile, &Profile, &Profile) -> Result<(), EngineError> + 'v;

/// Call `visit(alpha', beta', gamma)` for every admissible split.
pub(crate) fn for_each_split<F>(
    strategy: SplitStrategy,
    partitions: &Partitions,
    request: &SplitRequest<'_>,
    mut visit: F,
) -> Result<(), EngineError>
where
    F: FnMut(&Profile, &Profile, &Profile) -> Result<(), EngineError>,
{
    if let Some((lo, hi)) = request.gamma_total {
        if lo > hi || hi < 0 {
            return Ok(());
        }
    }
    match strategy {
        SplitStrategy::WeightedSplit => weighted_split(partitions, request, &mut visit),
        SplitStrategy::DominanceBacktrack => dominance_backtrack(request, &mut visit),
    }
}

fn weighted_split(
    partitions: &Partitions,
    request: &SplitRequest<'_>,
    visit: &mut Visit<'_>,
) -> Result<(), EngineError> {
    let first = match request.gamma_total {
        Some((lo, _)) => request.beta.weighted_sum() + lo.max(0),
        None => 0,
    };
    for j in first..=request.previous_weight {
        for b_prev in partitions.get(j) {
            if !b_prev.dominates(request.beta) {
                continue;
            }
            let gamma = b_prev.subtract(request.beta)?;
            if !within(request.gamma_total, gamma.total()) {
                continue;
            }
            for a_prev in partitions.get(request.previous_weight - j) {
                if request.alpha.dominates(a_prev) {
                    visit(a_prev, b_prev, &gamma)?;
                }
            }
        }
    }
    Ok(())
}

fn dominance_backtrack(request: &SplitRequest<'_>, visit: &mut Visit<'_>) -> Result<(), EngineError> {
    let budget = request.previous_weight - request.beta.weighted_sum();
    if budget < 0 {
        return Ok(());
    }
    let len = request.alpha.len();
    let max_total = request.gamma_total.map_or(budget, |(_, hi)| hi);
    let mut a_values = vec![0u32; len];
    below(request.alpha, 0, budget, &mut a_values, &mut |a_prev: &Profile| {
        let remaining = budget - a_prev.weighted_sum();
        let mut g_values = vec![0u32; len];
        bounded_partitions(remaining, len, max_total, &mut g_values, &mut |gamma: &Profile| {
            if !within(request.gamma_total, gamma.total()) {
                return Ok(());
            }
            let b_prev = request.beta.add(gamma);
            visit(a_prev, &b_prev, gamma)
        })
    })
}

fn within(bounds: Option<(i64, i64)>, total: i64) -> bool {
    bounds.map_or(true, |(lo, hi)| lo <= total && total <= hi)
}

/// Every profile `p <= alpha` with `I(p) <= budget`.
fn below(
    alpha: &Profile,
    pos: usize,
    budget: i64,
    values: &mut Vec<u32>,
    visit: &mut dyn FnMut(&Profile) -> Result<(), EngineError>,
) -> Result<(), EngineError> {
    if pos == values.len() {
        return visit(&Profile::from(values.clone()));
    }
    let weight = pos as i64 + 1;
    let most = (alpha.get(pos) as i64).min(budget / weight);
    for v in 0..=most {
        values[pos] = v as u32;
        below(alpha, pos + 1, budget - v * weight, values, visit)?;
    }
    values[pos] = 0;
    Ok(())
}

/// Every length-`len` profile of weight exactly `weight` with at most
/// `max_total` units, filled from the heaviest position down.
fn bounded_partitions(
    weight: i64,
    len: usize,
    max_total: i64,
    values: &mut Vec<u32>,
    visit: &mut dyn FnMut(&Profile) -> Result<(), EngineError>,
) -> Result<(), EngineError> {
    if len == 0 {
        return if weight == 0 {
            visit(&Profile::from(values.clone()))
        } else {
            Ok(())
        };
    }
    let pos = len - 1;
    let unit = pos as i64 + 1;
    if pos == 0 {
        if weight <= max_total {
            values[0] = weight as u32;
            visit(&Profile::from(values.clone()))?;
            values[0] = 0;
        }
        return Ok(());
    }
    for v in (0..=(weight / unit).min(max_total)).rev() {
        values[pos] = v as u32;
        bounded_partitions(weight - v * unit, pos, max_total - v, values, visit)?;
    }
    values[pos] = 0;
    Ok(())
}
