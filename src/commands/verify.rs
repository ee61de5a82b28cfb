//! `grover verify`: structural checks on the operators for one register size.
use anyhow::{bail, Result};
use colored::Colorize;

use crate::core::{diffuser, gates, oracle, state, GroverError};

/// Largest register `verify` checks; the H and diffuser products are O(N³).
pub const VERIFY_MAX_QUBITS: usize = 8;

/// (property, passed)
pub fn check_operators(qubits: usize, tolerance: f64) -> Result<Vec<(String, bool)>> {
    if qubits > VERIFY_MAX_QUBITS {
        return Err(GroverError::InvalidDimension(format!(
            "verify supports at most {VERIFY_MAX_QUBITS} qubits, got {qubits}"
        ))
        .into());
    }
    let size = state::qubit_dim(qubits)?;
    let h = gates::hadamard_n(qubits)?;
    let d = diffuser::diffuser_qubits(qubits)?;

    let mut checks = vec![
        (format!("H⊗{qubits} orthogonal"), h.is_orthogonal(tolerance)),
        (format!("H⊗{qubits} self-inverse"), h.is_involution(tolerance)),
        (format!("diffuser({size}) involution"), d.is_involution(tolerance)),
    ];
    // H|0…0⟩ must reproduce the direct uniform vector
    let from_h = h.apply(&state::basis_zero(size)?)?;
    let direct = state::uniform(size)?;
    let same = from_h
        .as_slice()
        .iter()
        .zip(direct.as_slice())
        .all(|(a, b)| (a - b).abs() <= tolerance);
    checks.push(("H|0⟩ equals uniform start".to_string(), same));

    // a ±1 diagonal squares to I, so each oracle is checked by structure alone
    let oracles_ok = (0..size).all(|i| {
        oracle::from_index(qubits, i)
            .map(|o| o.is_sign_diagonal(tolerance))
            .unwrap_or(false)
    });
    checks.push((format!("all {size} index oracles involutions"), oracles_ok));
    Ok(checks)
}

pub fn verify(qubits: usize, tolerance: f64) -> Result<()> {
    let checks = check_operators(qubits, tolerance)?;
    let failed = checks.iter().filter(|(_, ok)| !ok).count();
    for (name, ok) in &checks {
        let tag = if *ok { "ok".green().bold() } else { "FAIL".red().bold() };
        println!("{tag} {name}");
    }
    if failed > 0 {
        bail!("{failed} operator check(s) failed at tolerance {tolerance:e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_supported_register_passes() {
        let checks = check_operators(VERIFY_MAX_QUBITS, 1e-9).unwrap();
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(|(_, ok)| *ok), "{checks:?}");
    }

    #[test]
    fn oversize_register_is_rejected() {
        for n in [VERIFY_MAX_QUBITS + 1, state::MAX_QUBITS] {
            let err = check_operators(n, 1e-9).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<GroverError>(),
                Some(GroverError::InvalidDimension(_))
            ));
        }
    }
}
