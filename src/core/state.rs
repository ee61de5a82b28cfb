//! State-space helpers: uniform superposition, |0…0⟩, norms and iteration counts.
use std::f64::consts::FRAC_PI_4;

use crate::core::error::{GroverError, Result};
use crate::core::types::Amplitudes;

/// Largest register the dense backend accepts (a 4096×4096 operator).
pub const MAX_QUBITS: usize = 12;
pub const MAX_DIM: usize = 1 << MAX_QUBITS;

/// Fixed iteration counts may overshoot the optimum by at most this factor.
pub const MAX_ITERATION_FACTOR: usize = 16;

pub fn check_dim(size: usize) -> Result<()> {
    if size == 0 {
        return Err(GroverError::invalid_dimension(
            "search space must hold at least one element",
        ));
    }
    if size > MAX_DIM {
        return Err(GroverError::InvalidDimension(format!(
            "{size} elements exceeds the dense limit of {MAX_DIM}"
        )));
    }
    Ok(())
}

/// Validates a qubit count and returns 2^n.
pub fn qubit_dim(n_qubits: usize) -> Result<usize> {
    if n_qubits < 1 {
        return Err(GroverError::invalid_dimension("need at least one qubit"));
    }
    if n_qubits > MAX_QUBITS {
        return Err(GroverError::InvalidDimension(format!(
            "{n_qubits} qubits exceeds the dense limit of {MAX_QUBITS}"
        )));
    }
    Ok(1usize << n_qubits)
}

/// N copies of 1/√N.
pub fn uniform(size: usize) -> Result<Amplitudes> {
    check_dim(size)?;
    let a = 1.0 / (size as f64).sqrt();
    Ok(Amplitudes::from_vec(vec![a; size]))
}

/// One-hot at index 0.
pub fn basis_zero(size: usize) -> Result<Amplitudes> {
    check_dim(size)?;
    let mut v = Amplitudes::zeros(size);
    v.data[0] = 1.0;
    Ok(v)
}

pub fn norm(v: &Amplitudes) -> f64 {
    v.norm()
}

pub fn normalize(v: &Amplitudes) -> Result<Amplitudes> {
    let n = norm(v);
    if n == 0.0 {
        return Err(GroverError::DegenerateVector);
    }
    Ok(Amplitudes { data: &v.data / n })
}

/// floor(π/4 · √N)
pub fn optimal_iterations(size: usize) -> usize {
    (FRAC_PI_4 * (size as f64).sqrt()).floor() as usize
}

/// Ceiling for a caller-chosen iteration count over `size` elements.
pub fn max_iterations(size: usize) -> usize {
    MAX_ITERATION_FACTOR * optimal_iterations(size).max(1)
}

/// Rejects a fixed count above `max_iterations(size)`.
pub fn check_iterations(size: usize, requested: usize) -> Result<()> {
    let limit = max_iterations(size);
    if requested > limit {
        return Err(GroverError::TooManyIterations { requested, limit });
    }
    Ok(())
}

/// floor(π/4 · √(N/M)); falls back to the single-solution count when nothing is marked.
pub fn optimal_iterations_for(size: usize, marked: usize) -> usize {
    if marked == 0 {
        return optimal_iterations(size);
    }
    (FRAC_PI_4 * (size as f64 / marked as f64).sqrt()).floor() as usize
}
