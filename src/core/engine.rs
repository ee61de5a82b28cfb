//! Amplitude-amplification engine.
//!
//! Lifecycle: `Initialized → Amplifying { remaining } → Done`.
//! - entering `Amplifying` prepares the uniform superposition and fixes the
//!   iteration count
//! - each further `step` is one oracle (+ optional renormalize) + diffuser pass
//! - `Done` exposes the final amplitudes read-only
//!
//! Every transition is a separate `step()` call, so callers can stop between
//! iterations and resume later.
use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;

use crate::core::diffuser;
use crate::core::error::{GroverError, Result};
use crate::core::gates;
use crate::core::oracle::{self, MarkedPolicy};
use crate::core::state;
use crate::core::types::{Amplitudes, Operator};
use crate::debug_log;

/// How the initial superposition is produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitStrategy {
    /// 1/√N written directly into every slot.
    #[default]
    Uniform,
    /// H⊗n applied to |0…0⟩; needs N = 2^n with n ≥ 1.
    Hadamard,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IterationCount {
    /// floor(π/4 · √N)
    #[default]
    Standard,
    /// floor(π/4 · √(N/M)) for M marked positions.
    MarkedAware,
    Fixed(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub renormalize_after_oracle: bool,
    pub init: InitStrategy,
    pub marked_policy: MarkedPolicy,
    pub iterations: IterationCount,
    /// Record marked-set probability after init and after every iteration.
    pub record_trace: bool,
}

impl EngineConfig {
    /// Basis-index formulation: Hadamard start, no renormalization.
    pub fn qubit_model() -> Self {
        Self { init: InitStrategy::Hadamard, ..Self::default() }
    }

    /// Element-list formulation: direct uniform start, renormalize after the oracle.
    pub fn element_model() -> Self {
        Self { renormalize_after_oracle: true, ..Self::default() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    Amplifying { remaining: usize },
    Done,
}

#[derive(Debug)]
pub struct GroverEngine {
    size: usize,
    marked: Vec<usize>,
    oracle: Operator,
    diffuser: Operator,
    hadamard: Option<Operator>,
    config: EngineConfig,
    state: Amplitudes,
    phase: Phase,
    iterations: usize,
    completed: usize,
    trace: Vec<f64>,
}

impl GroverEngine {
    /// 2^n register searching for `solution_index`.
    pub fn for_qubits(
        n_qubits: usize,
        solution_index: usize,
        config: EngineConfig,
    ) -> Result<Self> {
        let size = state::qubit_dim(n_qubits)?;
        let oracle = oracle::from_index(n_qubits, solution_index)?;
        Self::build(size, vec![solution_index], oracle, config)
    }

    /// Arbitrary element list; `marked` is matched by value.
    pub fn for_elements<T: Eq + Hash>(
        elements: &[T],
        marked: &HashSet<T>,
        config: EngineConfig,
    ) -> Result<Self> {
        state::check_dim(elements.len())?;
        let positions = oracle::marked_positions(elements, marked, config.marked_policy)?;
        let oracle = oracle::from_positions(elements.len(), &positions)?;
        Self::build(elements.len(), positions, oracle, config)
    }

    fn build(
        size: usize,
        marked: Vec<usize>,
        oracle: Operator,
        config: EngineConfig,
    ) -> Result<Self> {
        if let IterationCount::Fixed(k) = config.iterations {
            state::check_iterations(size, k)?;
        }
        let hadamard = match config.init {
            InitStrategy::Uniform => None,
            InitStrategy::Hadamard => {
                if !size.is_power_of_two() || size < 2 {
                    return Err(GroverError::InvalidDimension(format!(
                        "Hadamard start needs 2^n elements with n >= 1, got {size}"
                    )));
                }
                Some(gates::hadamard_n(size.trailing_zeros() as usize)?)
            }
        };
        let diffuser = diffuser::diffuser(size)?;
        debug_log!(
            "engine: N={} marked={:?} init={:?} renormalize={}",
            size, marked, config.init, config.renormalize_after_oracle
        );
        Ok(Self {
            size,
            marked,
            oracle,
            diffuser,
            hadamard,
            config,
            state: state::basis_zero(size)?,
            phase: Phase::Initialized,
            iterations: 0,
            completed: 0,
            trace: Vec::new(),
        })
    }

    pub fn size(&self) -> usize { self.size }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn config(&self) -> &EngineConfig { &self.config }

    /// Sorted marked positions the oracle flips.
    pub fn marked(&self) -> &[usize] { &self.marked }

    /// Iteration count fixed on entry to `Amplifying` (0 before that).
    pub fn iterations(&self) -> usize { self.iterations }

    pub fn completed(&self) -> usize { self.completed }

    /// Current amplitudes (|0…0⟩ until the first step).
    pub fn state(&self) -> &Amplitudes { &self.state }

    /// Final amplitudes; `None` until the engine is `Done`.
    pub fn final_amplitudes(&self) -> Option<&Amplitudes> {
        match self.phase {
            Phase::Done => Some(&self.state),
            _ => None,
        }
    }

    /// Marked-set probability per recorded point (empty unless `record_trace`).
    pub fn trace(&self) -> &[f64] { &self.trace }

    /// Advance exactly one transition.
    pub fn step(&mut self) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::Initialized => {
                self.state = self.prepare()?;
                self.iterations = match self.config.iterations {
                    IterationCount::Standard => state::optimal_iterations(self.size),
                    IterationCount::MarkedAware => {
                        state::optimal_iterations_for(self.size, self.marked.len())
                    }
                    IterationCount::Fixed(k) => k,
                };
                debug_log!("engine: amplifying for {} iteration(s)", self.iterations);
                self.record();
                Phase::Amplifying { remaining: self.iterations }
            }
            Phase::Amplifying { remaining: 0 } => {
                debug_log!("engine: done after {} iteration(s)", self.completed);
                Phase::Done
            }
            Phase::Amplifying { remaining } => {
                self.iterate()?;
                Phase::Amplifying { remaining: remaining - 1 }
            }
            Phase::Done => Phase::Done,
        };
        Ok(self.phase)
    }

    /// Drive to `Done` and return the final amplitudes.
    pub fn run(&mut self) -> Result<&Amplitudes> {
        while self.phase != Phase::Done {
            self.step()?;
        }
        Ok(&self.state)
    }

    pub fn into_amplitudes(self) -> Amplitudes {
        self.state
    }

    fn prepare(&self) -> Result<Amplitudes> {
        match &self.hadamard {
            Some(h) => h.apply(&state::basis_zero(self.size)?),
            None => state::uniform(self.size),
        }
    }

    fn iterate(&mut self) -> Result<()> {
        let mut psi = self.oracle.apply(&self.state)?;
        if self.config.renormalize_after_oracle {
            psi = state::normalize(&psi)?;
        }
        self.state = self.diffuser.apply(&psi)?;
        self.completed += 1;
        self.record();
        Ok(())
    }

    fn record(&mut self) {
        if self.config.record_trace {
            self.trace.push(self.state.mass_at(&self.marked));
        }
    }
}

/// Qubit-model entry point: 2^n amplitudes after the standard iteration count.
pub fn grover_qubits(n_qubits: usize, solution_index: usize) -> Result<Amplitudes> {
    let mut engine =
        GroverEngine::for_qubits(n_qubits, solution_index, EngineConfig::qubit_model())?;
    engine.run()?;
    Ok(engine.into_amplitudes())
}

/// Element-list entry point: one amplitude per element, in input order.
pub fn grover_elements<T: Eq + Hash>(elements: &[T], marked: &HashSet<T>) -> Result<Amplitudes> {
    let mut engine = GroverEngine::for_elements(elements, marked, EngineConfig::element_model())?;
    engine.run()?;
    Ok(engine.into_amplitudes())
}
