// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text output of computed generations.
//!
//! - [`render_invariant`] and [`monomial`]: one-line forms
//! - [`GeneratingSeries`]: per-alpha series blocks of a slice
//! - [`FileSink`]: observer writing both to files for the final generations

mod files;
mod render;
mod series;

pub use files::FileSink;
pub use render::{monomial, render_invariant};
pub use series::{GeneratingSeries, SeriesBlock};
