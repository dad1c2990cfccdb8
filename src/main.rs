// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `curves`: count singular curves with tangency conditions.
//!
//! ```text
//! curves plane --degree 6 --max-nodes 4
//! curves quadric -a 4 -b 3 --max-genus-drop 2
//! curves hirzebruch -n 1 -a 3 -b 1 --max-genus-drop 2
//! curves check-decrease plane --degree 8 --max-nodes 5
//! ```
//!
//! Tables for the last `--print-last` generations are written below
//! `--output-dir`. Set `RUST_LOG` to change the log level (default `info`).

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use singular_curves::check::MonotonicityChecker;
use singular_curves::config::{EngineConfig, EvaluationMode, OutputConfig, Pruning};
use singular_curves::engine::Engine;
use singular_curves::output::FileSink;
use singular_curves::surface::SurfaceSpec;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Caporaso-Harris and Vakil recursions for P^2, P^1 x P^1 and F_n.
#[derive(Parser)]
#[command(name = "curves", version, about)]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Options {
    /// Abort on the first diagnostic instead of counting it as zero.
    #[arg(long, global = true)]
    strict: bool,

    /// Enumerate every split of the reduction term (slow reference mode).
    #[arg(long, global = true)]
    exhaustive: bool,

    /// Root directory for output tables.
    #[arg(long, global = true, default_value = "output")]
    output_dir: PathBuf,

    /// Number of final generations written to files.
    #[arg(long, global = true, default_value_t = 5)]
    print_last: usize,

    /// Largest beta weight (beyond simple tangencies) in generating series.
    #[arg(long, global = true, default_value_t = 10)]
    series_weight: i64,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Surface(SurfaceCommand),

    /// Check that values decrease along alpha instead of writing tables.
    CheckDecrease {
        #[command(subcommand)]
        surface: SurfaceCommand,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum SurfaceCommand {
    /// Plane curves of degree up to D with up to R nodes.
    Plane {
        #[arg(short, long)]
        degree: i32,
        #[arg(short = 'r', long)]
        max_nodes: i32,
    },
    /// Curves in O(i, b) on P^1 x P^1 for i up to a.
    Quadric {
        #[arg(short)]
        a: i32,
        #[arg(short)]
        b: i32,
        #[arg(short = 'g', long)]
        max_genus_drop: i32,
    },
    /// Curves in ih + (b + n(a - i))f on the Hirzebruch surface F_n.
    Hirzebruch {
        #[arg(short)]
        n: i32,
        #[arg(short)]
        a: i32,
        #[arg(short)]
        b: i32,
        #[arg(short = 'g', long)]
        max_genus_drop: i32,
    },
}

impl SurfaceCommand {
    fn surface(self) -> SurfaceSpec {
        match self {
            SurfaceCommand::Plane { degree, max_nodes } => SurfaceSpec::Plane {
                max_degree: degree,
                max_nodes,
            },
            SurfaceCommand::Quadric {
                a,
                b,
                max_genus_drop,
            } => SurfaceSpec::Quadric {
                a,
                b,
                max_genus_drop,
            },
            SurfaceCommand::Hirzebruch {
                n,
                a,
                b,
                max_genus_drop,
            } => SurfaceSpec::Hirzebruch {
                n,
                a,
                b,
                max_genus_drop,
            },
        }
    }
}

impl Options {
    fn engine_config(&self, surface: SurfaceSpec) -> EngineConfig {
        let mode = if self.strict {
            EvaluationMode::Strict
        } else {
            EvaluationMode::Lenient
        };
        let pruning = if self.exhaustive {
            Pruning::Exhaustive
        } else {
            Pruning::Derived
        };
        EngineConfig::new(surface).with_mode(mode).with_pruning(pruning)
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig::default()
            .with_output_dir(self.output_dir.clone())
            .with_print_last(self.print_last)
            .with_series_weight(self.series_weight)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn compute(surface: SurfaceSpec, options: &Options) -> Result<()> {
    let mut engine = Engine::new(options.engine_config(surface))?;
    let mut sink = FileSink::new(&surface, options.output_config());
    let summary = engine.run(&mut sink)?;

    println!("{}", summary);
    println!(
        "Wrote {} files below {}",
        sink.written().len(),
        options.output_dir.display()
    );
    for diagnostic in engine.diagnostics().records() {
        println!("  {}: {}", diagnostic.kind, diagnostic.message);
    }
    Ok(())
}

fn check_decrease(surface: SurfaceSpec, options: &Options) -> Result<()> {
    let mut engine = Engine::new(options.engine_config(surface))?;
    let mut checker = MonotonicityChecker::new();
    let summary = engine.run(&mut checker)?;

    println!("{}", summary);
    println!("Comparisons:        {}", checker.comparisons());
    for violation in checker.violations() {
        println!("{}", violation);
    }
    if !checker.is_clean() {
        bail!("{} values increase along alpha", checker.violations().len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Surface(command) => compute(command.surface(), &cli.options),
        Command::CheckDecrease { surface } => check_decrease(surface.surface(), &cli.options),
    }
}
