//! Hadamard gate and its n-qubit tensor power.
use nalgebra::DMatrix;

use crate::core::error::Result;
use crate::core::ops;
use crate::core::state;
use crate::core::types::Operator;

pub fn h() -> DMatrix<f64> {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DMatrix::from_row_slice(2, 2, &[s, s, s, -s])
}

/// H⊗n as a dense 2^n × 2^n operator.
pub fn hadamard_n(n_qubits: usize) -> Result<Operator> {
    state::qubit_dim(n_qubits)?;
    Ok(Operator { m: ops::tensor_power(&h(), n_qubits) })
}
