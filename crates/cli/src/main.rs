//! E20 cache simulator CLI.
//!
//! Runs an E20 machine-code listing to completion and prints one trace line
//! per cache access. It performs:
//! 1. **Configuration:** Parses `--cache` (and optionally a JSON `--config`) before touching the program.
//! 2. **Loading:** Reads the `ram[N] = 16'b...;` listing into memory.
//! 3. **Simulation:** Executes until the halt instruction, streaming the cache trace to stdout.
//! 4. **Reporting:** Optionally dumps the final machine state and run statistics.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use e20sim_core::common::constants::DEFAULT_DUMP_WORDS;
use e20sim_core::common::{ConfigError, LoadError, SimError};
use e20sim_core::config::{CacheHierarchyConfig, Config, LoadPolicy};
use e20sim_core::core::Cpu;
use e20sim_core::core::units::cache::CacheHierarchy;
use e20sim_core::sim::report::write_final_state;
use e20sim_core::sim::trace::write_cache_configs;
use e20sim_core::sim::{Simulator, WriterSink, loader};

#[derive(Parser, Debug)]
#[command(
    name = "simcache",
    version,
    about = "Simulate E20 machine code with an L1/L2 cache model",
    long_about = "Simulate E20 machine code with an L1/L2 cache model.\n\nCache configuration is size,associativity,blocksize for one cache, or six values for L1 then L2.\n\nExamples:\n  simcache --cache 4,1,1 prog.bin\n  simcache --cache 8,2,1,32,4,2 prog.bin"
)]
struct Cli {
    /// Cache configuration: size,associativity,blocksize[,size,associativity,blocksize].
    #[arg(long, value_name = "CACHE", value_parser = parse_cache)]
    cache: Option<CacheHierarchyConfig>,

    /// JSON run configuration; command-line flags override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Update the destination register on every load, not only on misses.
    #[arg(long)]
    always_read: bool,

    /// Print registers and the first 128 memory words after the run.
    #[arg(long)]
    dump_state: bool,

    /// Print run statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Give up after this many instructions.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Machine-code listing to simulate.
    filename: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("Can't write output: {0}")]
    Io(#[from] io::Error),
}

fn parse_cache(value: &str) -> Result<CacheHierarchyConfig, ConfigError> {
    value.parse()
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `fmt` subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Merges the JSON configuration (if any) with command-line flags.
fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if cli.cache.is_some() {
        config.cache = cli.cache;
    }
    if cli.always_read {
        config.load_policy = LoadPolicy::AlwaysRead;
    }
    if cli.max_steps.is_some() {
        config.max_steps = cli.max_steps;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    let caches = config.cache.as_ref().map(CacheHierarchy::new).transpose()?;

    let mut out = io::stdout().lock();
    if let Some(caches) = &caches {
        write_cache_configs(&mut out, caches.levels())?;
    }

    let image = loader::load_program_file(&cli.filename)?;
    let cpu = Cpu::new(&image, caches, config.load_policy);
    let mut sim = Simulator::new(cpu, config.max_steps);

    let mut sink = WriterSink::new(out);
    let result = sim.run(&mut sink);
    let mut out = sink.into_inner();
    out.flush()?;
    let summary = result?;
    info!(steps = summary.steps, pc = %summary.final_pc, "run complete");

    if cli.dump_state {
        write_final_state(
            &mut out,
            sim.cpu.pc,
            &sim.cpu.regs,
            &sim.cpu.memory,
            DEFAULT_DUMP_WORDS,
        )?;
    }
    if cli.stats {
        eprint!("{}", sim.cpu.stats);
    }
    Ok(())
}
