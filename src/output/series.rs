// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generating-series text of one slice.
//!
//! For each light alpha the slice's values are listed as terms of a series in
//! the beta variables:
//!
//! ```text
//! alpha = [0,0,0]
//! 1+12b^1+...+
//! ```

use crate::config::OutputConfig;
use crate::engine::GenerationView;
use crate::output::monomial;
use crate::sequence::Profile;
use num_bigint::BigInt;
use std::fmt;

/// Terms of the series for one alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesBlock {
    pub alpha: Profile,
    /// Coefficient and monomial, in beta partition order.
    pub terms: Vec<(BigInt, String)>,
}

impl fmt::Display for SeriesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "alpha = {}", self.alpha)?;
        for (coefficient, monomial) in &self.terms {
            write!(f, "{}{}+", coefficient, monomial)?;
        }
        write!(f, "\n\n")
    }
}

/// Weight caps of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratingSeries {
    /// Largest `I(beta) - beta[0]` kept as a term.
    pub series_weight: i64,
    /// Largest `I(alpha)` given a block.
    pub alpha_weight: i64,
}

impl GeneratingSeries {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            series_weight: config.series_weight,
            alpha_weight: config.series_alpha_weight,
        }
    }

    /// Blocks of one secondary index, heaviest alpha first.
    pub fn blocks(&self, view: &GenerationView<'_>, secondary: i32) -> Vec<SeriesBlock> {
        let partitions = view.partitions();
        let target = view.class().target_weight();
        let mut blocks = Vec::new();
        for j in (0..=self.alpha_weight.min(target)).rev() {
            for alpha in partitions.get(j) {
                let terms = partitions
                    .get(target - j)
                    .iter()
                    .filter(|beta| beta.weighted_sum() - beta.get(0) as i64 <= self.series_weight)
                    .filter_map(|beta| {
                        view.get(secondary, alpha, beta)
                            .map(|value| (value.clone(), monomial(beta)))
                    })
                    .collect();
                blocks.push(SeriesBlock {
                    alpha: alpha.clone(),
                    terms,
                });
            }
        }
        blocks
    }

    pub fn render(&self, view: &GenerationView<'_>, secondary: i32) -> String {
        self.blocks(view, secondary)
            .iter()
            .map(|block| block.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::{Engine, NoopObserver};
    use crate::surface::SurfaceSpec;

    #[test]
    fn test_cubic_series() {
        let mut engine = Engine::new(EngineConfig::new(SurfaceSpec::Plane {
            max_degree: 3,
            max_nodes: 1,
        }))
        .unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let view = engine.view().unwrap();
        let series = GeneratingSeries {
            series_weight: 10,
            alpha_weight: 0,
        };
        let blocks = series.blocks(&view, 1);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].alpha, Profile::zeros(3));
        // beta = [3,0,0], [1,1,0], [0,0,1]
        assert_eq!(blocks[0].terms.len(), 3);
        assert_eq!(blocks[0].terms[0], (BigInt::from(12), String::new()));
        assert_eq!(blocks[0].terms[1].1, "b^1");
        assert_eq!(blocks[0].terms[2].1, "c^1");
        assert!(series.render(&view, 1).starts_with("alpha = [0,0,0]\n12+"));
    }

    #[test]
    fn test_series_weight_filters_terms() {
        let mut engine = Engine::new(EngineConfig::new(SurfaceSpec::Plane {
            max_degree: 3,
            max_nodes: 0,
        }))
        .unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let view = engine.view().unwrap();
        let series = GeneratingSeries {
            series_weight: 1,
            alpha_weight: 0,
        };
        // Only [3,0,0] (weight 0 beyond position 0) survives; [1,1,0] has
        // weight 2 beyond position 0 and [0,0,1] has 3.
        let blocks = series.blocks(&view, 0);
        assert_eq!(blocks[0].terms, vec![(BigInt::from(1), String::new())]);
        assert_eq!(blocks[0].to_string(), "alpha = [0,0,0]\n1+\n\n");
    }
}
