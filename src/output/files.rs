// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer writing the last generations of a run to text files.
//!
//! For every secondary index `s` of a printed generation `C`:
//!
//! ```text
//! <output_dir>/<label>/<C>_<sym>=<s>.txt         one line per invariant
//! <output_dir>/genFun<label>/<C>_<sym>=<s>.txt   generating series blocks
//! ```
//!
//! with `<label>` one of `CH`, `F0`, `Hir` and `<sym>` `r` or `g`, e.g.
//! `output/CH/O(4)_r=2.txt`.

use crate::config::OutputConfig;
use crate::engine::{GenerationObserver, GenerationView};
use crate::errors::EngineError;
use crate::output::{render_invariant, GeneratingSeries};
use crate::surface::{CurveClass, SurfaceSpec};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes invariant tables and generating series of the final generations.
#[derive(Debug)]
pub struct FileSink {
    config: OutputConfig,
    series: GeneratingSeries,
    printed: Vec<CurveClass>,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(surface: &SurfaceSpec, config: OutputConfig) -> Self {
        let classes = surface.classes();
        let skip = classes.len().saturating_sub(config.print_last);
        Self {
            series: GeneratingSeries::new(&config),
            printed: classes[skip..].to_vec(),
            config,
            written: Vec::new(),
        }
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn slice_path(&self, directory: &str, view: &GenerationView<'_>, secondary: i32) -> PathBuf {
        let surface = view.surface();
        self.config.output_dir.join(directory).join(format!(
            "{}_{}={}.txt",
            view.class(),
            surface.secondary_symbol(),
            secondary
        ))
    }

    fn write_file(
        &mut self,
        path: PathBuf,
        contents: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    ) -> Result<(), EngineError> {
        write_with(&path, contents)
            .map_err(|err| EngineError::Output(format!("{}: {}", path.display(), err)))?;
        tracing::debug!(path = %path.display(), "wrote output file");
        self.written.push(path);
        Ok(())
    }
}

fn write_with(
    path: &Path,
    contents: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    contents(&mut writer)?;
    writer.flush()
}

impl GenerationObserver for FileSink {
    fn on_slice(&mut self, view: &GenerationView<'_>, secondary: i32) -> Result<(), EngineError> {
        if !self.printed.contains(&view.class()) {
            return Ok(());
        }
        let label = view.surface().label();

        let table = self.slice_path(label, view, secondary);
        self.write_file(table, |out| {
            for (key, value) in view.entries(secondary) {
                writeln!(out, "{}", render_invariant(&key, value))?;
            }
            Ok(())
        })?;

        let series = self.series.render(view, secondary);
        let path = self.slice_path(&format!("genFun{}", label), view, secondary);
        self.write_file(path, |out| out.write_all(series.as_bytes()))
    }

    fn on_generation(&mut self, view: &GenerationView<'_>) -> Result<(), EngineError> {
        if self.printed.contains(&view.class()) {
            tracing::info!(class = %view.class(), "generation written");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::Engine;

    #[test]
    fn test_only_last_generations_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let surface = SurfaceSpec::Plane {
            max_degree: 3,
            max_nodes: 1,
        };
        let config = OutputConfig::default()
            .with_output_dir(dir.path())
            .with_print_last(2);
        let mut sink = FileSink::new(&surface, config);
        let mut engine = Engine::new(EngineConfig::new(surface)).unwrap();
        engine.run(&mut sink).unwrap();

        // Degrees 2 and 3, two node counts each, table plus series.
        assert_eq!(sink.written().len(), 8);
        assert!(!dir.path().join("CH").join("O(1)_r=0.txt").exists());

        let table = fs::read_to_string(dir.path().join("CH").join("O(3)_r=1.txt")).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "N(O(3), 1, [3,0,0], [0,0,0]) = 10");
        assert_eq!(lines[9], "N(O(3), 1, [0,0,0], [0,0,1]) = 21");

        let series = fs::read_to_string(dir.path().join("genFunCH").join("O(3)_r=0.txt")).unwrap();
        assert!(series.starts_with("alpha = [3,0,0]\n1+\n\n"));
    }
}
