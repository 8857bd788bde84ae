use crate::{assert, linalg::matmul::matmul, MatMut, MatRef};

/// Computes the matrix $R^\top R$ given its Cholesky factor $R$, and stores the result in `dst`.
///
/// # Panics
///
/// - Panics if `cholesky_factor` is not a square matrix.
/// - Panics if the destination shape doesn't match the shape of the matrix.
#[track_caller]
pub fn reconstruct_upper(dst: MatMut<'_>, cholesky_factor: MatRef<'_>) {
    assert!(cholesky_factor.nrows() == cholesky_factor.ncols());
    assert!((dst.nrows(), dst.ncols()) == (cholesky_factor.nrows(), cholesky_factor.ncols()));

    matmul(
        dst,
        cholesky_factor.transpose(),
        cholesky_factor,
        None,
        1.0,
    );
}
