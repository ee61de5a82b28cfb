//! Reading results back out of an amplitude vector.
use std::fmt;

use crate::core::types::{Amplitudes, EPS};

/// `v[i]²` per index.
pub fn probabilities(v: &Amplitudes) -> Vec<f64> {
    v.as_slice().iter().map(|a| a * a).collect()
}

/// argmax of `v[i]²`, lowest index on ties. `None` for an empty vector.
///
/// Probabilities within `EPS` of each other count as a tie, so rounding noise
/// in the last bits never moves the winner off the lower index.
pub fn most_likely(v: &Amplitudes) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in probabilities(v).into_iter().enumerate() {
        match best {
            Some((_, bp)) if p <= bp + EPS => {}
            _ => best = Some((i, p)),
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct Readout {
    pub amplitudes: Vec<f64>,
    pub probabilities: Vec<f64>,
    pub winner: Option<(usize, f64)>,
    pub total: f64,
    labels: Option<Vec<String>>,
    precision: usize,
}

impl Readout {
    pub fn from_amplitudes(v: &Amplitudes) -> Self {
        let probabilities = probabilities(v);
        Self {
            amplitudes: v.as_slice().to_vec(),
            total: probabilities.iter().sum(),
            winner: most_likely(v),
            probabilities,
            labels: None,
            precision: 6,
        }
    }

    /// Element names shown next to each index; ignored unless one per amplitude.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        if labels.len() == self.amplitudes.len() {
            self.labels = Some(labels);
        }
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.as_ref().and_then(|l| l.get(i)).map(String::as_str)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        for (i, (a, pr)) in self.amplitudes.iter().zip(&self.probabilities).enumerate() {
            match self.label(i) {
                Some(l) => write!(f, "{i} ({l})")?,
                None => write!(f, "{i}")?,
            }
            writeln!(f, ": amplitude {a:+.p$}, probability {pr:.p$}")?;
        }
        writeln!(f, "total probability: {:.p$}", self.total)?;
        match self.winner {
            Some((i, pr)) => match self.label(i) {
                Some(l) => write!(f, "most likely: {i} ({l}) with probability {pr:.p$}"),
                None => write!(f, "most likely: {i} with probability {pr:.p$}"),
            },
            None => write!(f, "most likely: none (empty state)"),
        }
    }
}
