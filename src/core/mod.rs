//! Dense real-valued simulation of Grover search.
//!
//! - `state`    → uniform / |0…0⟩ vectors, norms, iteration counts
//! - `gates`    → single-qubit H and H⊗n
//! - `oracle`   → sign-flip diagonals (by index or by element value)
//! - `diffuser` → 2·|s⟩⟨s| − I
//! - `engine`   → the amplification state machine and the two entry points
//! - `readout`  → probabilities, argmax, printable summary

pub mod debug;
pub mod diffuser;
pub mod engine;
pub mod error;
pub mod gates;
pub mod ops;
pub mod oracle;
pub mod readout;
pub mod state;
pub mod types;

pub use engine::{
    grover_elements, grover_qubits, EngineConfig, GroverEngine, InitStrategy, IterationCount, Phase,
};
pub use error::{GroverError, Result};
pub use oracle::MarkedPolicy;
pub use types::{Amplitudes, Operator};
