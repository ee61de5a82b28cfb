//! Phase oracles: diagonal ±1 operators that flip the sign of marked positions.
//!
//! Two front doors share one builder:
//! - `from_index(n, i)` → qubit register of 2^n, single solution index
//! - `from_elements(domain, marked, policy)` → arbitrary element list, marked by value
//!
//! The element form resolves marked values through a `DomainIndex` built once
//! per call, so each marked value costs one hash lookup instead of a scan of the domain.
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::core::error::{GroverError, Result};
use crate::core::ops;
use crate::core::state;
use crate::core::types::Operator;
use crate::debug_log;

/// What to do with marked elements that do not occur in the domain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MarkedPolicy {
    /// Skip them (debug-logged).
    #[default]
    Permissive,
    /// Fail with `UnknownMarked`.
    Strict,
}

/// element → every position it occupies in the domain
pub struct DomainIndex<'a, T> {
    positions: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> DomainIndex<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        let mut positions: HashMap<&'a T, Vec<usize>> = HashMap::with_capacity(elements.len());
        for (i, e) in elements.iter().enumerate() {
            positions.entry(e).or_default().push(i);
        }
        Self { positions }
    }

    pub fn positions_of(&self, element: &T) -> Option<&[usize]> {
        self.positions.get(element).map(Vec::as_slice)
    }
}

/// Sorted positions of every marked element present in `elements`.
pub fn marked_positions<T: Eq + Hash>(
    elements: &[T],
    marked: &HashSet<T>,
    policy: MarkedPolicy,
) -> Result<Vec<usize>> {
    let index = DomainIndex::new(elements);
    let mut out = Vec::new();
    let mut missing = 0usize;
    for m in marked {
        match index.positions_of(m) {
            Some(ps) => out.extend_from_slice(ps),
            None => missing += 1,
        }
    }
    if missing > 0 {
        match policy {
            MarkedPolicy::Strict => return Err(GroverError::UnknownMarked { missing }),
            MarkedPolicy::Permissive => {
                debug_log!("oracle: ignoring {} marked element(s) absent from the domain", missing)
            }
        }
    }
    out.sort_unstable();
    Ok(out)
}

/// Sign-flip diagonal of `size` over `positions`.
pub fn from_positions(size: usize, positions: &[usize]) -> Result<Operator> {
    state::check_dim(size)?;
    if let Some(&bad) = positions.iter().find(|&&p| p >= size) {
        return Err(GroverError::invalid_index(bad, size));
    }
    Ok(Operator { m: ops::sign_diagonal(size, positions) })
}

pub fn from_index(n_qubits: usize, solution_index: usize) -> Result<Operator> {
    let size = state::qubit_dim(n_qubits)?;
    from_positions(size, &[solution_index])
}

pub fn from_elements<T: Eq + Hash>(
    elements: &[T],
    marked: &HashSet<T>,
    policy: MarkedPolicy,
) -> Result<Operator> {
    state::check_dim(elements.len())?;
    let positions = marked_positions(elements, marked, policy)?;
    from_positions(elements.len(), &positions)
}
