use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::engine::InitStrategy;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum InitKind {
    Uniform,
    #[clap(alias = "h")]
    Hadamard,
}

impl From<InitKind> for InitStrategy {
    fn from(k: InitKind) -> Self {
        match k {
            InitKind::Uniform => InitStrategy::Uniform,
            InitKind::Hadamard => InitStrategy::Hadamard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "grover",
    about = "Grover search on a dense real-valued state vector",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct GroverCli {
    /// Global: debug logging to stderr (same as GROVER_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: plain output without ANSI colors
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: path to config (TOML); default: ~/.grover/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Engine knobs shared by `search` and `elements`. Unset flags defer to the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// Renormalize the state after every oracle application
    #[arg(long = "renormalize", action = ArgAction::SetTrue, conflicts_with = "no_renormalize")]
    pub renormalize: bool,

    /// Never renormalize after the oracle
    #[arg(long = "no-renormalize", action = ArgAction::SetTrue)]
    pub no_renormalize: bool,

    /// How the initial superposition is built
    #[arg(long = "init", value_enum, value_name = "STRATEGY")]
    pub init: Option<InitKind>,

    /// Run exactly K iterations instead of floor(pi/4 * sqrt(N))
    #[arg(long = "iterations", value_name = "K", conflicts_with = "marked_aware")]
    pub iterations: Option<usize>,

    /// Use floor(pi/4 * sqrt(N/M)) iterations for M marked positions
    #[arg(long = "marked-aware", action = ArgAction::SetTrue)]
    pub marked_aware: bool,

    /// Fail when a marked element is not in the domain
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    pub strict: bool,

    /// Print marked-set probability after every iteration
    #[arg(long = "trace", action = ArgAction::SetTrue)]
    pub trace: bool,

    /// Decimal places in the amplitude table
    #[arg(long = "precision", value_name = "DIGITS")]
    pub precision: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search a 2^n basis register for one index
    ///
    /// Example:
    ///   grover search --qubits 3 --target 5
    Search {
        #[arg(short = 'n', long = "qubits", value_name = "N")]
        qubits: usize,
        #[arg(short = 't', long = "target", value_name = "INDEX")]
        target: usize,
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Search an explicit element list for a marked subset (matched by value)
    ///
    /// Example:
    ///   grover elements --items a,b,c,d,e,f,g,h --marked c,f
    Elements {
        #[arg(long = "items", value_name = "ITEMS", value_delimiter = ',', required = true)]
        items: Vec<String>,
        #[arg(long = "marked", value_name = "ITEMS", value_delimiter = ',')]
        marked: Vec<String>,
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Check operator properties (orthogonality, involution) for n qubits
    Verify {
        #[arg(short = 'n', long = "qubits", value_name = "N")]
        qubits: usize,
        #[arg(long = "tolerance", value_name = "TOL", default_value_t = 1e-9)]
        tolerance: f64,
    },
}
