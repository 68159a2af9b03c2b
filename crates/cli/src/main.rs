//! RV32I pipeline simulator CLI.
//!
//! This binary runs one simulation from two memory image files. It performs:
//! 1. **Setup:** Parses arguments, installs logging, loads an optional JSON config.
//! 2. **Loading:** Reads the binary-text instruction image and the hex data image.
//! 3. **Run:** Clocks the pipeline for the cycle budget, dumping state per cycle when tracing.
//! 4. **Report:** Prints the load-use hazard count and the statistics report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rv32pipe_core::config::Config;
use rv32pipe_core::sim::{Simulator, loader};
use rv32pipe_core::soc::System;
use rv32pipe_core::{Cpu, SimError};

/// Usage line printed when the positional arguments are missing or malformed.
const USAGE: &str = "usage: rv32pipe imem_data_file dmem_data_file";

#[derive(Parser, Debug)]
#[command(
    name = "rv32pipe",
    version,
    about = "Cycle-level simulator of a five-stage pipelined RV32I core",
    long_about = "Loads an instruction image (ASCII binary, 32 digits per instruction) and a data \
                  image (one hex word per line), then clocks the pipeline for a fixed number of \
                  cycles.\n\nExamples:\n  rv32pipe prog.txt data.txt\n  rv32pipe prog.txt data.txt --cycles 100 --trace"
)]
struct Cli {
    /// Instruction image: binary digits, 32 per instruction, MSB first.
    imem_data_file: PathBuf,

    /// Data image: hexadecimal words, one per line.
    dmem_data_file: PathBuf,

    /// Number of cycles to simulate (overrides the config file).
    #[arg(long)]
    cycles: Option<u64>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print registers and data memory after every cycle.
    #[arg(long)]
    trace: bool,

    /// Log filter (e.g. `debug`, `rv32pipe_core=trace`); defaults to `RUST_LOG`, then `warn`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            if write_usage(&mut io::stdout().lock()).is_err() {
                eprintln!("{USAGE}");
            }
            eprintln!("{e}");
            process::exit(1);
        }
    };

    init_logging(cli.log_level.as_deref());

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Writes the usage line to `out`.
fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{USAGE}")
}

/// Installs the `tracing` subscriber writing to stderr.
fn init_logging(level: Option<&str>) {
    let (filter, rejected) = match level {
        Some(l) => match EnvFilter::try_new(l) {
            Ok(f) => (f, None),
            Err(_) => (EnvFilter::new("warn"), Some(l)),
        },
        None => (
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            None,
        ),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Some(l) = rejected {
        warn!(filter = l, "invalid log filter, falling back to warn");
    }
}

/// Reads the configuration file, or returns the defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<Config, SimError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

/// Applies command-line overrides on top of the file configuration.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(cycles) = cli.cycles {
        config.general.cycle_budget = cycles;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    info!(
        config = ?cli.config,
        budget = config.general.cycle_budget,
        trace = config.general.trace_instructions,
        "configuration resolved"
    );
}

/// Prints the register file and the leading data-memory words.
fn print_state(cpu: &Cpu) {
    print!("{}", cpu.dump_state());
}

/// Loads both images, runs the simulation, and prints the report.
///
/// A trap is reported after dumping the final state and statistics.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);

    let program = loader::load_instruction_image(&cli.imem_data_file)?;
    let data = loader::load_data_image(&cli.dmem_data_file)?;
    let system = System::with_images(&config, &program, &data)?;
    let mut sim = Simulator::new(system, &config);

    let trace = config.general.trace_instructions;
    let result = sim.run_with(config.general.cycle_budget, |cpu| {
        if trace {
            println!("---------------- cycle {} ----------------", cpu.stats.cycles);
            print_state(cpu);
        }
    });

    match result {
        Ok(_) => {
            if sim.is_halted() {
                info!(cycle = sim.cpu.stats.cycles, pc = sim.cpu.pc, "program halted");
                println!("\n[*] Halted at cycle {}", sim.cpu.stats.cycles);
            } else {
                info!(cycles = sim.cpu.stats.cycles, "cycle budget exhausted");
            }
            if !trace {
                print_state(&sim.cpu);
            }
            println!("\nhazard count: {}", sim.cpu.hazard_count());
            sim.cpu.stats.print();
            Ok(())
        }
        Err(e @ SimError::Trap { .. }) => {
            error!(cycle = sim.cpu.stats.cycles, "fatal trap: {e}");
            print_state(&sim.cpu);
            println!("\nhazard count: {}", sim.cpu.hazard_count());
            sim.cpu.stats.print();
            process::exit(1);
        }
        Err(e) => Err(e),
    }
}
