use crate::{assert, Mat, MatAccess, MatMut};

/// Computes the Cholesky factor $R$ of the leading `n×n` block of `matrix`, where `n` is
/// `matrix.ncols()`, and stores it in `dst`. The strictly lower triangular part of `dst` is set to
/// zero.
///
/// The factor is built one column at a time, each entry above the diagonal being obtained from
/// the dot product of two previously computed columns of $R$.
///
/// Returns `true` if the leading block was found to be symmetric positive definite and `matrix` is
/// square, otherwise returns `false`. In the latter case `dst` still holds a fully computed
/// factor, where non-positive pivots have been replaced by zero and entries that would have been
/// divided by a zero pivot are set to zero.
///
/// # Panics
///
/// - Panics if `matrix.nrows() < matrix.ncols()`.
/// - Panics if `dst` is not an `n×n` matrix.
#[track_caller]
pub fn cholesky_upper_into<A: MatAccess + ?Sized>(dst: MatMut<'_>, matrix: &A) -> bool {
    let n = matrix.ncols();
    assert!(all(
        matrix.nrows() >= n,
        dst.nrows() == n,
        dst.ncols() == n,
    ));

    let mut r = dst;
    let mut is_spd = matrix.nrows() == n;

    for j in 0..n {
        let mut d = 0.0;
        for k in 0..j {
            let mut s = matrix.read(k, j);
            for i in 0..k {
                s -= r.read(i, k) * r.read(i, j);
            }

            let pivot = r.read(k, k);
            let r_kj = if pivot == 0.0 { 0.0 } else { s / pivot };
            r.write(k, j, r_kj);
            d += r_kj * r_kj;
            is_spd = is_spd && matrix.read(k, j) == matrix.read(j, k);
        }

        d = matrix.read(j, j) - d;
        is_spd = is_spd && d > 0.0;
        r.write(j, j, d.max(0.0).sqrt());
        for k in j + 1..n {
            r.write(k, j, 0.0);
        }
    }

    is_spd
}

/// Computes the Cholesky factor $R$ of `matrix` such that $A = R^\top R$, along with a flag that
/// is `true` if `matrix` was found to be symmetric positive definite.
///
/// See [`cholesky_upper_into`] for the handling of inputs that are not symmetric positive
/// definite.
///
/// # Panics
///
/// Panics if `matrix.nrows() < matrix.ncols()`.
#[track_caller]
pub fn cholesky_upper<A: MatAccess + ?Sized>(matrix: &A) -> (Mat, bool) {
    let n = matrix.ncols();
    let mut factor = Mat::zeros(n, n);
    let is_spd = cholesky_upper_into(factor.as_mut(), matrix);
    (factor, is_spd)
}
