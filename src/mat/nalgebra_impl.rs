//! Interoperability with `nalgebra` dense matrices.

use super::{Mat, MatAccess, MatAccessMut};
use nalgebra::DMatrix;

impl MatAccess for DMatrix<f64> {
    #[inline]
    fn nrows(&self) -> usize {
        nalgebra::Matrix::nrows(self)
    }
    #[inline]
    fn ncols(&self) -> usize {
        nalgebra::Matrix::ncols(self)
    }
    #[inline]
    #[track_caller]
    fn read(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

impl MatAccessMut for DMatrix<f64> {
    #[inline]
    #[track_caller]
    fn write(&mut self, i: usize, j: usize, value: f64) {
        self[(i, j)] = value;
    }
}

impl From<&DMatrix<f64>> for Mat {
    fn from(value: &DMatrix<f64>) -> Self {
        Mat::from_fn(value.nrows(), value.ncols(), |i, j| value[(i, j)])
    }
}

impl From<&Mat> for DMatrix<f64> {
    fn from(value: &Mat) -> Self {
        DMatrix::from_row_slice(value.nrows(), value.ncols(), value.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::cholesky::{llt, rtr};
    use crate::mat;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn factorize_nalgebra_input() {
        let a = DMatrix::from_row_slice(3, 3, &[4.0, 2.0, 0.4, 2.0, 3.0, 0.5, 0.4, 0.5, 2.0]);

        let (l, spd) = llt::compute::cholesky_lower(&a);
        assert!(spd);
        let expected = a.clone().cholesky().unwrap().l();
        for i in 0..3 {
            for j in 0..3 {
                assert_approx_eq!(l.read(i, j), expected[(i, j)]);
            }
        }

        let (r, spd) = rtr::compute::cholesky_upper(&a);
        assert!(spd);
        for i in 0..3 {
            for j in 0..3 {
                assert_approx_eq!(r.read(i, j), expected[(j, i)]);
            }
        }
    }

    #[test]
    fn solve_into_nalgebra_rhs() {
        let a = mat![[4.0, 2.0], [2.0, 3.0]];
        let (l, _) = llt::compute::cholesky_lower(&a);
        let mut b = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        llt::solve::solve_in_place(&l, &mut b).unwrap();
        assert_approx_eq!(b[(0, 0)], -0.125, 1e-9);
        assert_approx_eq!(b[(1, 0)], 0.75, 1e-9);
    }

    #[test]
    fn conversions() {
        let a = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let n: DMatrix<f64> = (&a).into();
        assert!(n[(1, 0)] == 4.0);
        assert_eq!(Mat::from(&n), a);
    }
}
