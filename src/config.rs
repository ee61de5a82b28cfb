//! Optional TOML configuration: engine defaults and output formatting.
//!
//! Lookup: `--config FILE` if given (must exist), else `~/.grover/config.toml`
//! when present, else built-in defaults.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::engine::{EngineConfig, InitStrategy, IterationCount};
use crate::core::oracle::MarkedPolicy;
use crate::debug_log;

pub const DEFAULT_PRECISION: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroverConfig {
    pub engine: EngineSection,
    pub output: OutputSection,
}

/// Unset keys keep the entry point's own default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub renormalize_after_oracle: Option<bool>,
    pub init: Option<InitStrategy>,
    pub strict_marked: Option<bool>,
    pub marked_aware_iterations: Option<bool>,
    pub record_trace: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub precision: Option<usize>,
}

impl GroverConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        toml::from_str(txt).context("parsing grover config")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Layer the file's engine keys over `base`.
    pub fn apply_to(&self, base: EngineConfig) -> EngineConfig {
        let e = &self.engine;
        let mut cfg = base;
        if let Some(r) = e.renormalize_after_oracle {
            cfg.renormalize_after_oracle = r;
        }
        if let Some(init) = e.init {
            cfg.init = init;
        }
        if let Some(strict) = e.strict_marked {
            cfg.marked_policy =
                if strict { MarkedPolicy::Strict } else { MarkedPolicy::Permissive };
        }
        if e.marked_aware_iterations == Some(true) {
            cfg.iterations = IterationCount::MarkedAware;
        }
        if let Some(t) = e.record_trace {
            cfg.record_trace = t;
        }
        cfg
    }

    pub fn precision(&self) -> usize {
        self.output.precision.unwrap_or(DEFAULT_PRECISION)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.grover/config.toml (C:\Users\you\.grover\config.toml on Windows)
    dirs_next::home_dir().map(|h| h.join(".grover").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the effective config. An explicit path must exist; the default path may not.
pub fn load(cli_path: &Option<PathBuf>) -> Result<GroverConfig> {
    match (cli_path, resolve_config_path(cli_path)) {
        (Some(_), Some(p)) => GroverConfig::from_toml_file(&p),
        (None, Some(p)) if p.is_file() => {
            debug_log!("config: using {}", p.display());
            GroverConfig::from_toml_file(&p)
        }
        _ => {
            debug_log!("config: no file, using built-in defaults");
            Ok(GroverConfig::default())
        }
    }
}
