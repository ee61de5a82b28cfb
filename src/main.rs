//! grover — search subcommands, operator verification, TOML-configurable engine.
use clap::Parser; // trait import enables GroverCli::parse()
use colored::Colorize;

use grover_sim::cli::{Command, GroverCli};
use grover_sim::{commands, config, core::debug, debug_log};

fn main() {
    let args = GroverCli::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    if args.debug {
        debug::force_enable();
    }

    if let Err(e) = dispatch(args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn dispatch(args: GroverCli) -> anyhow::Result<()> {
    let cfg = config::load(&args.config)?;
    debug_log!("config: {:?}", cfg);

    match args.cmd {
        Command::Search { qubits, target, engine } => {
            commands::search::search_qubits(qubits, target, &engine, &cfg)
        }
        Command::Elements { items, marked, engine } => {
            commands::search::search_elements(&items, &marked, &engine, &cfg)
        }
        Command::Verify { qubits, tolerance } => commands::verify::verify(qubits, tolerance),
    }
}
