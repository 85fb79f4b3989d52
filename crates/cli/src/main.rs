//! Pipeline simulator CLI.
//!
//! This binary provides the entry points for running and checking simulations. It performs:
//! 1. **Run:** Loads one instruction image per core plus the shared data image, runs the
//!    simulator to completion and writes every result file to an output directory.
//! 2. **Compare:** Diffs a generated trace against a reference trace and prints the verdict.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pipesim_core::common::SimError;
use pipesim_core::config::Config;
use pipesim_core::sim::{Simulator, loader, output, trace};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate multi-core delayed-branch pipeline simulator",
    long_about = "Run programs on the five-stage pipeline, or compare two execution traces.\n\nExamples:\n  sim run --imem imem0.txt imem1.txt imem2.txt imem3.txt --memin memin.txt --out outputs\n  sim compare outputs/core0trace.txt reference/core0trace.txt"
)]
struct Cli {
    /// Log stage events (`debug`); repeat for forwarding detail (`trace`). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one program per core and write the result files.
    Run {
        /// Instruction memory image of each core, in core order.
        #[arg(long, num_args = 1.., required = true)]
        imem: Vec<PathBuf>,

        /// Initial data memory image.
        #[arg(long)]
        memin: PathBuf,

        /// Directory receiving traces, regout, stats, listings and memout.
        #[arg(long, default_value = "outputs")]
        out: PathBuf,

        /// JSON configuration file; built-in defaults when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare a generated trace with a reference trace.
    Compare {
        /// Generated trace.
        generated: PathBuf,

        /// Reference trace.
        reference: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            imem,
            memin,
            out,
            config,
        } => {
            if let Err(e) = cmd_run(&imem, &memin, &out, config.as_deref()) {
                error!("{e}");
                eprintln!("\n[!] FATAL: {e}");
                process::exit(1);
            }
        }
        Commands::Compare {
            generated,
            reference,
        } => cmd_compare(&generated, &reference),
    }
}

/// Loads the images, runs every core to completion and writes the result files.
fn cmd_run(
    imem: &[PathBuf],
    memin: &Path,
    out: &Path,
    config_path: Option<&Path>,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if config_path.is_none() {
        config.general.num_cores = imem.len();
    }

    let programs = imem
        .iter()
        .map(loader::load_imem)
        .collect::<Result<Vec<_>, _>>()?;
    let data = loader::load_memin(memin, config.memory.main_mem_words)?;

    let mut sim = Simulator::new(&config, &programs, &data)?;
    let cycles = sim.run()?;
    output::write_outputs(&sim, out, config.memory.memout_min_words)?;

    info!(cycles, "run finished");
    for core in &sim.cores {
        core.stats.print(core.id);
    }
    Ok(())
}

/// Prints the comparison verdict. Unreadable files are reported, never fatal.
fn cmd_compare(generated: &Path, reference: &Path) {
    match trace::compare_files(generated, reference) {
        Ok(verdict) => println!("{verdict}"),
        Err(e) => println!("Error: {e}"),
    }
}
