//! Matrix multiplication.

use crate::{assert, MatMut, MatRef};

/// Computes the matrix product `[alpha * acc] + beta * lhs * rhs` and
/// stores the result in `acc`.
///
/// Performs the operation:
/// - `acc = beta * lhs * rhs` if `alpha` is `None` (in this case, the preexisting values in `acc`
///   are not read),
/// - `acc = alpha * acc + beta * lhs * rhs` if `alpha` is `Some(_)`,
///
/// The inner products are accumulated sequentially in increasing index order.
///
/// # Panics
///
/// Panics if the matrix dimensions are not compatible for matrix multiplication.  
/// i.e.  
///  - `acc.nrows() == lhs.nrows()`
///  - `acc.ncols() == rhs.ncols()`
///  - `lhs.ncols() == rhs.nrows()`
///
/// # Example
///
/// ```
/// use dense_cholesky::{linalg::matmul::matmul, mat, Mat};
///
/// let lhs = mat![[0.0, 2.0], [1.0, 3.0]];
/// let rhs = mat![[4.0, 6.0], [5.0, 7.0]];
///
/// let mut acc = Mat::zeros(2, 2);
/// matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), None, 2.5);
///
/// assert_eq!(acc, mat![[25.0, 35.0], [47.5, 67.5]]);
/// ```
#[track_caller]
pub fn matmul(acc: MatMut<'_>, lhs: MatRef<'_>, rhs: MatRef<'_>, alpha: Option<f64>, beta: f64) {
    let mut acc = acc;
    assert!(all(
        acc.nrows() == lhs.nrows(),
        acc.ncols() == rhs.ncols(),
        lhs.ncols() == rhs.nrows(),
    ));

    let depth = lhs.ncols();
    for i in 0..acc.nrows() {
        for j in 0..acc.ncols() {
            let mut dot = 0.0;
            for k in 0..depth {
                dot += lhs.read(i, k) * rhs.read(k, j);
            }
            let value = match alpha {
                Some(alpha) => alpha * acc.read(i, j) + beta * dot,
                None => beta * dot,
            };
            acc.write(i, j, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat, Mat};
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_alpha() {
        let lhs = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let rhs = mat![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

        let mut acc = Mat::from_fn(2, 2, |_, _| f64::NAN);
        matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), None, 1.0);
        assert_eq!(acc, mat![[4.0, 5.0], [10.0, 11.0]]);

        matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), Some(2.0), -1.0);
        assert_eq!(acc, mat![[4.0, 5.0], [10.0, 11.0]]);

        matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), Some(0.0), 0.5);
        assert_eq!(acc, mat![[2.0, 2.5], [5.0, 5.5]]);
    }

    #[test]
    fn test_transposed_operands() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = Mat::from_fn(5, 3, |_, _| rng.gen::<f64>());
        let b = Mat::from_fn(5, 4, |_, _| rng.gen::<f64>());

        let mut atb = Mat::zeros(3, 4);
        matmul(atb.as_mut(), a.transpose(), b.as_ref(), None, 1.0);

        let mut btat = Mat::zeros(4, 3);
        matmul(btat.as_mut().transpose_mut(), a.transpose(), b.as_ref(), None, 1.0);

        for i in 0..3 {
            for j in 0..4 {
                let mut expected = 0.0;
                for k in 0..5 {
                    expected += a.read(k, i) * b.read(k, j);
                }
                assert_approx_eq!(atb.read(i, j), expected);
                assert_approx_eq!(btat.read(j, i), expected);
            }
        }
    }

    #[test]
    fn test_empty_depth() {
        let lhs = Mat::zeros(3, 0);
        let rhs = Mat::zeros(0, 2);
        let mut acc = Mat::from_fn(3, 2, |_, _| 1.0);
        matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), Some(3.0), 1.0);
        assert_eq!(acc, Mat::from_fn(3, 2, |_, _| 3.0));
    }

    #[test]
    #[should_panic]
    fn test_incompatible_shapes() {
        let lhs = Mat::zeros(2, 3);
        let rhs = Mat::zeros(2, 2);
        let mut acc = Mat::zeros(2, 2);
        matmul(acc.as_mut(), lhs.as_ref(), rhs.as_ref(), None, 1.0);
    }
}
