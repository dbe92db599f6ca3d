//! Single-cycle RV32 subset simulator CLI.
//!
//! This binary runs one simulation over an IO directory. It performs:
//! 1. **Load:** Reads `imem.txt` and `dmem.txt` from the directory.
//! 2. **Run:** Steps the datapath until it halts, writing the per-cycle traces.
//! 3. **Persist:** Writes the final data memory and metrics next to the inputs.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rvss_core::Simulator;
use rvss_core::config::{Config, UnknownOpcodePolicy};

/// Handling of opcodes outside the supported subset.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnknownOpcode {
    /// Execute silently as a no-op.
    Ignore,
    /// Execute as a no-op and log a warning.
    Warn,
    /// Abort the run.
    Fault,
}

impl From<UnknownOpcode> for UnknownOpcodePolicy {
    fn from(value: UnknownOpcode) -> Self {
        match value {
            UnknownOpcode::Ignore => Self::Ignore,
            UnknownOpcode::Warn => Self::Warn,
            UnknownOpcode::Fault => Self::Fault,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "rvss",
    author,
    version,
    about = "Single-cycle RV32 subset simulator",
    long_about = "Run the program in <IO_DIR>/imem.txt against <IO_DIR>/dmem.txt.\n\nWrites SS_RFResult.txt, StateResult_SS.txt, SS_DMEMResult.txt and SS_Metrics.txt into the same directory.\n\nExamples:\n  rvss tests/io\n  rvss tests/io --unknown-opcode fault --max-cycles 10000\n  rvss tests/io --config sim.json -vv"
)]
struct Cli {
    /// Directory holding imem.txt and dmem.txt; results are written here.
    io_dir: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Handling of opcodes outside the supported subset (overrides the config file).
    #[arg(long, value_enum)]
    unknown_opcode: Option<UnknownOpcode>,

    /// Abort if the machine has not halted after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Do not write the per-cycle trace files.
    #[arg(long)]
    no_trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the run configuration from the optional file and command-line overrides.
fn build_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };

    if let Some(policy) = cli.unknown_opcode {
        config.general.unknown_opcode = policy.into();
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    if cli.no_trace {
        config.general.trace_cycles = false;
    }
    config
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = build_config(&cli);

    println!("IO Directory: {}", cli.io_dir.display());

    let mut sim = Simulator::from_dir(&cli.io_dir, &config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let outcome = sim.run().map(|_| ());
    if let Err(e) = outcome {
        eprintln!("\n[!] FATAL: {e}");
        sim.cpu().regs().dump();
        sim.cpu().stats().print();
        process::exit(1);
    }

    if let Err(e) = sim.persist(&cli.io_dir) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }

    println!("Simulation completed!");
    print!("{}", sim.cpu().stats().metrics_report());
    sim.cpu().stats().print();
}
