//! Real-valued amplitude vectors and operators for the dense simulator.
use nalgebra::{DMatrix, DVector};

use crate::core::error::{GroverError, Result};
use crate::core::ops;

pub const EPS: f64 = 1e-12;

/// Tolerance for the structural checks (orthogonality, involution).
pub const CHECK_TOL: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct Amplitudes {
    pub data: DVector<f64>,
}

impl Amplitudes {
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { data: DVector::from_vec(values) }
    }

    pub fn zeros(n: usize) -> Self {
        Self { data: DVector::zeros(n) }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_slice(&self) -> &[f64] { self.data.as_slice() }

    pub fn get(&self, i: usize) -> Option<f64> { self.data.get(i).copied() }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 { self.data.norm() }

    /// Summed probability mass `Σ v[i]²` over `positions`.
    pub fn mass_at(&self, positions: &[usize]) -> f64 {
        positions
            .iter()
            .filter_map(|&i| self.get(i))
            .map(|a| a * a)
            .sum()
    }
}

#[derive(Clone, Debug)]
pub struct Operator {
    pub m: DMatrix<f64>,
}

impl Operator {
    pub fn dim(&self) -> usize { self.m.nrows() }

    /// Apply to a full amplitude vector (dimensions must match).
    pub fn apply(&self, psi: &Amplitudes) -> Result<Amplitudes> {
        if self.m.ncols() != psi.len() {
            return Err(GroverError::mismatch(self.m.ncols(), psi.len()));
        }
        Ok(Amplitudes { data: &self.m * &psi.data })
    }

    /// `self · other`
    pub fn compose(&self, other: &Operator) -> Result<Operator> {
        if self.dim() != other.dim() {
            return Err(GroverError::mismatch(self.dim(), other.dim()));
        }
        Ok(Operator { m: &self.m * &other.m })
    }

    /// ‖AᵗA − I‖∞ ≤ tol
    pub fn is_orthogonal(&self, tol: f64) -> bool {
        let ata = self.m.transpose() * &self.m;
        ops::max_deviation_from_identity(&ata) <= tol
    }

    /// ‖AA − I‖∞ ≤ tol
    pub fn is_involution(&self, tol: f64) -> bool {
        let aa = &self.m * &self.m;
        ops::max_deviation_from_identity(&aa) <= tol
    }

    /// Diagonal with every entry ±1 (within tol), so A·A = I without forming the product.
    pub fn is_sign_diagonal(&self, tol: f64) -> bool {
        let n = self.m.nrows();
        self.m.iter().enumerate().all(|(k, &x)| {
            // column-major storage
            if k % n == k / n {
                (x.abs() - 1.0).abs() <= tol
            } else {
                x.abs() <= tol
            }
        })
    }
}
