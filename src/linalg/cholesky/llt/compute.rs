use crate::{assert, Mat, MatAccess, MatAccessMut, MatMut};
use dyn_stack::{GlobalPodBuffer, PodStack, SizeOverflow, StackReq};

/// Computes the size and alignment of required workspace for performing a lower Cholesky
/// decomposition of a matrix with `dim` columns.
pub fn cholesky_lower_req(dim: usize) -> Result<StackReq, SizeOverflow> {
    StackReq::try_all_of([StackReq::try_new::<f64>(dim)?; 2])
}

/// Computes the Cholesky factor $L$ of the leading `n×n` block of `matrix`, where `n` is
/// `matrix.ncols()`, and stores it in `dst`. The strictly upper triangular part of `dst` is set to
/// zero.
///
/// The factor is built one row at a time: row `j` of $L$ only depends on rows `0..j` and on row
/// `j` of `matrix`, and is written to `dst` once it is complete.
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
///
/// This can also panic if the provided memory in `stack` is insufficient (see
/// [`cholesky_lower_req`]).
#[track_caller]
pub fn cholesky_lower_into<A: MatAccess + ?Sized>(
    dst: MatMut<'_>,
    matrix: &A,
    stack: PodStack<'_>,
) -> bool {
    let n = matrix.ncols();
    assert!(all(
        matrix.nrows() >= n,
        dst.nrows() == n,
        dst.ncols() == n,
    ));

    #[cfg(feature = "perf-warn")]
    if dst.col_stride() != 1 && n > 1 && crate::__perf_warn!(CHOLESKY_LOWER_WARN) {
        log::warn!(target: "dense_cholesky_perf", "Lower Cholesky prefers a destination with contiguous rows. Found matrix with column stride {}.", dst.col_stride());
    }

    let mut l = dst;
    let (row_j, stack) = stack.make_raw::<f64>(n);
    let (row_k, _) = stack.make_raw::<f64>(n);

    let mut is_spd = matrix.nrows() == n;

    for j in 0..n {
        let mut d = 0.0;
        for k in 0..j {
            l.read_row(k, row_k);
            let mut s = 0.0;
            for i in 0..k {
                s += row_k[i] * row_j[i];
            }

            let pivot = row_k[k];
            let l_jk = if pivot == 0.0 {
                0.0
            } else {
                (matrix.read(j, k) - s) / pivot
            };
            row_j[k] = l_jk;
            d += l_jk * l_jk;
            is_spd = is_spd && matrix.read(k, j) == matrix.read(j, k);
        }

        d = matrix.read(j, j) - d;
        is_spd = is_spd && d > 0.0;
        row_j[j] = d.max(0.0).sqrt();
        for x in &mut row_j[j + 1..] {
            *x = 0.0;
        }
        l.write_row(j, row_j);
    }

    is_spd
}

/// Computes the Cholesky factor $L$ of `matrix` such that $A = LL^\top$, along with a flag that
/// is `true` if `matrix` was found to be symmetric positive definite.
///
/// See [`cholesky_lower_into`] for the handling of inputs that are not symmetric positive
/// definite.
///
/// # Panics
///
/// Panics if `matrix.nrows() < matrix.ncols()`.
///
/// # Example
///
/// ```
/// use dense_cholesky::{linalg::cholesky::llt::compute::cholesky_lower, mat};
///
/// let (l, is_spd) = cholesky_lower(&mat![[4.0, 2.0], [2.0, 3.0]]);
/// assert!(is_spd);
/// assert_eq!(l.read(0, 0), 2.0);
/// assert_eq!(l.read(1, 0), 1.0);
/// assert_eq!(l.read(0, 1), 0.0);
/// assert!((l.read(1, 1) - 2.0f64.sqrt()).abs() < 1e-15);
/// ```
#[track_caller]
pub fn cholesky_lower<A: MatAccess + ?Sized>(matrix: &A) -> (Mat, bool) {
    let n = matrix.ncols();
    let mut factor = Mat::zeros(n, n);
    let is_spd = cholesky_lower_into(
        factor.as_mut(),
        matrix,
        PodStack::new(&mut GlobalPodBuffer::new(cholesky_lower_req(n).unwrap())),
    );
    (factor, is_spd)
}
