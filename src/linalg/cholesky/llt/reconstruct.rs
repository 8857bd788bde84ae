use crate::{assert, linalg::matmul::matmul, MatMut, MatRef};

/// Computes the matrix $LL^\top$ given its Cholesky factor $L$, and stores the result in `dst`.
///
/// The whole factor is read, so its strictly upper triangular part is expected to be zero, as is
/// the case for the factors computed in [`super::compute`].
///
/// # Panics
///
/// - Panics if `cholesky_factor` is not a square matrix.
/// - Panics if the destination shape doesn't match the shape of the matrix.
#[track_caller]
pub fn reconstruct_lower(dst: MatMut<'_>, cholesky_factor: MatRef<'_>) {
    assert!(cholesky_factor.nrows() == cholesky_factor.ncols());
    assert!((dst.nrows(), dst.ncols()) == (cholesky_factor.nrows(), cholesky_factor.ncols()));

    matmul(
        dst,
        cholesky_factor,
        cholesky_factor.transpose(),
        None,
        1.0,
    );
}
