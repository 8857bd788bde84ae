//! The upper Cholesky decomposition of a symmetric positive definite matrix $A$ is such that:
//! $$A = R^\top R,$$
//! where $R$ is an upper triangular matrix with a positive diagonal.
//!
//! For a given matrix, $R$ is the transpose of the factor computed by
//! [`llt`](super::llt), up to rounding errors.

/// Computing the decomposition.
pub mod compute;
/// Reconstructing the original matrix from the decomposition.
pub mod reconstruct;
/// Solving a linear system using the decomposition.
pub mod solve;

#[cfg(test)]
mod tests {
    use super::{compute::*, reconstruct::*, solve::*};
    use crate::{linalg::cholesky::SolveError, mat, Mat};
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_positive_definite(rng: &mut StdRng, n: usize) -> Mat {
        let a = Mat::from_fn(n, n, |_, _| rng.gen::<f64>());
        let mut aat = &a * a.transpose();
        for i in 0..n {
            aat.write(i, i, aat.read(i, i) + n as f64);
        }
        aat
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in (0..32).chain((2..6).map(|i| i * 16)) {
            let a = random_positive_definite(&mut rng, n);
            let (r, is_spd) = cholesky_upper(&a);
            assert!(is_spd);

            let mut a_reconstructed = Mat::zeros(n, n);
            reconstruct_upper(a_reconstructed.as_mut(), r.as_ref());
            for i in 0..n {
                for j in 0..n {
                    if i > j {
                        assert!(r.read(i, j) == 0.0);
                    }
                    assert_approx_eq!(a_reconstructed.read(i, j), a.read(i, j));
                }
            }
        }
    }

    #[test]
    fn test_solve() {
        let mut rng = StdRng::seed_from_u64(2);
        for n in [1, 2, 5, 12, 31] {
            let a = random_positive_definite(&mut rng, n);
            let rhs = Mat::from_fn(n, 2, |_, _| rng.gen::<f64>());
            let (r, _) = cholesky_upper(&a);

            let sol = solve(&r, &rhs).unwrap();
            let rhs_reconstructed = &a * &sol;
            for i in 0..n {
                for j in 0..2 {
                    assert_approx_eq!(rhs_reconstructed.read(i, j), rhs.read(i, j));
                }
            }
        }
    }

    #[test]
    fn test_solve_2x2() {
        let (r, is_spd) = cholesky_upper(&mat![[4.0, 2.0], [2.0, 3.0]]);
        assert!(is_spd);

        let mut x = mat![[1.0], [2.0]];
        solve_in_place(&r, &mut x).unwrap();
        assert_approx_eq!(x.read(0, 0), -0.125, 1e-9);
        assert_approx_eq!(x.read(1, 0), 0.75, 1e-9);
    }

    #[test]
    fn test_indefinite() {
        let (r, is_spd) = cholesky_upper(&mat![[1.0, 2.0], [2.0, 1.0]]);
        assert!(!is_spd);
        assert!(!r.as_ref().has_nan());
        assert_eq!(r, mat![[1.0, 2.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_asymmetric() {
        let (r, is_spd) = cholesky_upper(&mat![[4.0, 2.0], [3.0, 3.0]]);
        assert!(!is_spd);
        // only the upper triangle enters the factor
        assert!(r.read(0, 1) == 1.0);
        assert_approx_eq!(r.read(1, 1), 2.0f64.sqrt());
    }

    #[test]
    fn test_zero_matrix() {
        for n in 1..5 {
            let (r, is_spd) = cholesky_upper(&Mat::zeros(n, n));
            assert!(!is_spd);
            assert_eq!(r, Mat::zeros(n, n));
        }
    }

    #[test]
    fn test_empty() {
        let (r, is_spd) = cholesky_upper(&Mat::new());
        assert!(is_spd);
        assert!(r.shape() == (0, 0));
    }

    #[test]
    fn test_tall_input_uses_leading_block() {
        let a = mat![[4.0, 2.0], [2.0, 3.0], [7.0, -1.0]];
        let (r, is_spd) = cholesky_upper(&a);
        assert!(!is_spd);
        assert_eq!(r, cholesky_upper(&mat![[4.0, 2.0], [2.0, 3.0]]).0);
    }

    #[test]
    #[should_panic]
    fn test_wide_input() {
        cholesky_upper(&Mat::zeros(1, 2));
    }

    #[test]
    fn test_solve_errors() {
        let r = Mat::identity(2, 2);
        let mut rhs = Mat::zeros(3, 1);
        assert_eq!(
            solve_in_place(&r, &mut rhs),
            Err(SolveError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            solve(&Mat::zeros(3, 2), &rhs),
            Err(SolveError::NonSquareFactor { nrows: 3, ncols: 2 })
        );
    }
}
