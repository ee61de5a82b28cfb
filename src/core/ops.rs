//! Dense matrix building blocks: Kronecker products, outer products, sign diagonals.
use nalgebra::{DMatrix, DVector};

/// Kronecker product A ⊗ B
pub fn kron(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    let (br, bc) = b.shape();
    let mut out = DMatrix::<f64>::zeros(a.nrows() * br, a.ncols() * bc);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let aij = a[(i, j)];
            if aij == 0.0 {
                continue;
            }
            out.view_mut((i * br, j * bc), (br, bc)).copy_from(&(b * aij));
        }
    }
    out
}

/// `base ⊗ base ⊗ … ⊗ base` (`times` factors). Zero factors yields the 1×1 identity.
pub fn tensor_power(base: &DMatrix<f64>, times: usize) -> DMatrix<f64> {
    (0..times).fold(DMatrix::identity(1, 1), |acc, _| kron(&acc, base))
}

/// |v⟩⟨v|
pub fn outer(v: &DVector<f64>) -> DMatrix<f64> {
    v * v.transpose()
}

/// Identity of `size` with −1 on every listed diagonal position.
/// Positions must already be in range.
pub fn sign_diagonal(size: usize, positions: &[usize]) -> DMatrix<f64> {
    let mut m = DMatrix::<f64>::identity(size, size);
    for &p in positions {
        m[(p, p)] = -1.0;
    }
    m
}

/// max |m − I| over all entries
pub fn max_deviation_from_identity(m: &DMatrix<f64>) -> f64 {
    m.iter()
        .enumerate()
        .map(|(k, &x)| {
            // column-major storage
            let (r, c) = (k % m.nrows(), k / m.nrows());
            let target = if r == c { 1.0 } else { 0.0 };
            (x - target).abs()
        })
        .fold(0.0_f64, f64::max)
}
