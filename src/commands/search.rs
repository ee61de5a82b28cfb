//! `grover search` / `grover elements`: run the engine and print the readout.
use std::collections::HashSet;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::EngineArgs;
use crate::config::GroverConfig;
use crate::core::engine::{EngineConfig, GroverEngine, IterationCount};
use crate::core::oracle::MarkedPolicy;
use crate::core::readout::Readout;
use crate::debug_log;

/// Precedence: CLI flag > config file > entry-point default (`base`).
pub fn resolve_engine_config(
    base: EngineConfig,
    cfg: &GroverConfig,
    args: &EngineArgs,
) -> EngineConfig {
    let mut e = cfg.apply_to(base);
    if args.renormalize {
        e.renormalize_after_oracle = true;
    }
    if args.no_renormalize {
        e.renormalize_after_oracle = false;
    }
    if let Some(init) = args.init {
        e.init = init.into();
    }
    if let Some(k) = args.iterations {
        e.iterations = IterationCount::Fixed(k);
    } else if args.marked_aware {
        e.iterations = IterationCount::MarkedAware;
    }
    if args.strict {
        e.marked_policy = MarkedPolicy::Strict;
    }
    if args.trace {
        e.record_trace = true;
    }
    e
}

pub fn search_qubits(
    qubits: usize,
    target: usize,
    args: &EngineArgs,
    cfg: &GroverConfig,
) -> Result<()> {
    let config = resolve_engine_config(EngineConfig::qubit_model(), cfg, args);
    debug_log!("search: qubits={} target={} config={:?}", qubits, target, config);
    let mut engine = GroverEngine::for_qubits(qubits, target, config)
        .with_context(|| format!("setting up a {qubits}-qubit search for index {target}"))?;
    engine.run().context("amplitude amplification failed")?;
    report(&engine, None, args.precision.unwrap_or_else(|| cfg.precision()));
    Ok(())
}

pub fn search_elements(
    items: &[String],
    marked: &[String],
    args: &EngineArgs,
    cfg: &GroverConfig,
) -> Result<()> {
    let config = resolve_engine_config(EngineConfig::element_model(), cfg, args);
    let marked: HashSet<String> = marked.iter().cloned().collect();
    debug_log!("elements: N={} marked={:?} config={:?}", items.len(), marked, config);
    let mut engine = GroverEngine::for_elements(items, &marked, config)
        .with_context(|| format!("setting up a search over {} element(s)", items.len()))?;
    engine.run().context("amplitude amplification failed")?;
    report(&engine, Some(items.to_vec()), args.precision.unwrap_or_else(|| cfg.precision()));
    Ok(())
}

fn report(engine: &GroverEngine, labels: Option<Vec<String>>, precision: usize) {
    println!(
        "{} N={} iterations={} renormalize={}",
        "grover".cyan().bold(),
        engine.size(),
        engine.completed(),
        engine.config().renormalize_after_oracle
    );
    if !engine.trace().is_empty() {
        for (k, p) in engine.trace().iter().enumerate() {
            println!("{} after {k}: marked probability {p:.precision$}", "trace".dimmed());
        }
    }
    let mut readout = Readout::from_amplitudes(engine.state()).with_precision(precision);
    if let Some(l) = labels {
        readout = readout.with_labels(l);
    }
    println!("{readout}");
}
