//! Inversion about the mean: D = 2·|s⟩⟨s| − I with |s⟩ the uniform vector.
use nalgebra::DMatrix;

use crate::core::error::Result;
use crate::core::ops;
use crate::core::state;
use crate::core::types::Operator;

pub fn diffuser(size: usize) -> Result<Operator> {
    let s = state::uniform(size)?;
    let m = ops::outer(&s.data) * 2.0 - DMatrix::<f64>::identity(size, size);
    Ok(Operator { m })
}

pub fn diffuser_qubits(n_qubits: usize) -> Result<Operator> {
    diffuser(state::qubit_dim(n_qubits)?)
}
