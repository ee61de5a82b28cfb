use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GroverError {
    /// Qubit count below 1, empty domain, or a size the dense backend cannot hold.
    InvalidDimension(String),
    InvalidIndex { index: usize, size: usize },
    DegenerateVector,
    DimensionMismatch { expected: usize, actual: usize },
    /// Strict mode only: marked elements that are not part of the domain.
    UnknownMarked { missing: usize },
    /// Fixed iteration count above `state::max_iterations` for the space.
    TooManyIterations { requested: usize, limit: usize },
}

impl fmt::Display for GroverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroverError::InvalidDimension(msg) => write!(f, "Invalid Dimension: {}", msg),
            GroverError::InvalidIndex { index, size } => {
                write!(f, "Invalid Index: {} is outside [0, {})", index, size)
            }
            GroverError::DegenerateVector => {
                write!(f, "Degenerate Vector: cannot normalize a zero vector")
            }
            GroverError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension Mismatch: operator expects {} amplitudes, got {}",
                expected, actual
            ),
            GroverError::UnknownMarked { missing } => write!(
                f,
                "Unknown Marked: {} marked element(s) not present in the domain",
                missing
            ),
            GroverError::TooManyIterations { requested, limit } => write!(
                f,
                "Too Many Iterations: {} requested, at most {} allowed for this space",
                requested, limit
            ),
        }
    }
}

impl std::error::Error for GroverError {}

impl GroverError {
    pub fn invalid_dimension(message: &str) -> Self {
        GroverError::InvalidDimension(message.to_string())
    }
    pub fn invalid_index(index: usize, size: usize) -> Self {
        GroverError::InvalidIndex { index, size }
    }
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        GroverError::DimensionMismatch { expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, GroverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_invalid_dimension() {
        let err = GroverError::invalid_dimension("need at least one qubit");
        assert_eq!(format!("{}", err), "Invalid Dimension: need at least one qubit");
    }
    #[test] fn test_invalid_index() {
        let err = GroverError::invalid_index(9, 8);
        assert_eq!(format!("{}", err), "Invalid Index: 9 is outside [0, 8)");
    }
    #[test] fn test_degenerate_vector() {
        assert_eq!(
            format!("{}", GroverError::DegenerateVector),
            "Degenerate Vector: cannot normalize a zero vector"
        );
    }
    #[test] fn test_mismatch() {
        let err = GroverError::mismatch(4, 2);
        assert_eq!(format!("{}", err), "Dimension Mismatch: operator expects 4 amplitudes, got 2");
    }
    #[test] fn test_too_many_iterations() {
        let err = GroverError::TooManyIterations { requested: 1000, limit: 32 };
        assert_eq!(
            format!("{}", err),
            "Too Many Iterations: 1000 requested, at most 32 allowed for this space"
        );
    }
}
