//! Random matrix distributions, mainly useful for testing and benchmarking.

use crate::Mat;
use rand::distributions::Distribution;
use rand_distr::{Standard, StandardNormal};

/// The standard normal distribution, `N(0, 1)` for `0 <= i < nrows`, `0 <= j < ncols`.
pub struct StandardNormalMat {
    /// Number of rows of the sampled matrix.
    pub nrows: usize,
    /// Number of columns of the sampled matrix.
    pub ncols: usize,
}

/// The standard distribution. Samples uniformly distributed values for `0 <= i < nrows`, `0 <= j
/// < ncols`.
pub struct StandardMat {
    /// Number of rows of the sampled matrix.
    pub nrows: usize,
    /// Number of columns of the sampled matrix.
    pub ncols: usize,
}

/// Samples symmetric positive definite matrices of the form $MM^\top + nI$, where $M$ is drawn
/// from [`StandardNormalMat`] and $n$ is the dimension.
///
/// The sampled matrices are exactly symmetric.
pub struct PositiveDefiniteMat {
    /// Dimension of the sampled matrix.
    pub dim: usize,
}

impl Distribution<Mat> for StandardNormalMat {
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> Mat {
        Mat::from_fn(self.nrows, self.ncols, |_, _| StandardNormal.sample(rng))
    }
}

impl Distribution<Mat> for StandardMat {
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> Mat {
        Mat::from_fn(self.nrows, self.ncols, |_, _| Standard.sample(rng))
    }
}

impl Distribution<Mat> for PositiveDefiniteMat {
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> Mat {
        let n = self.dim;
        let m: Mat = StandardNormalMat { nrows: n, ncols: n }.sample(rng);
        let mut a = &m * m.transpose();
        for i in 0..n {
            a.write(i, i, a.read(i, i) + n as f64);
        }
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, linalg::cholesky::llt};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_shapes() {
        let rng = &mut StdRng::seed_from_u64(0);
        let a: Mat = StandardNormalMat { nrows: 3, ncols: 5 }.sample(rng);
        let b: Mat = StandardMat { nrows: 4, ncols: 2 }.sample(rng);
        assert!(all(a.shape() == (3, 5), b.shape() == (4, 2)));
        assert!(b.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_positive_definite() {
        let rng = &mut StdRng::seed_from_u64(0);
        for dim in [0, 1, 4, 17] {
            let a = PositiveDefiniteMat { dim }.sample(rng);
            assert!(a.shape() == (dim, dim));
            assert_eq!(a.transpose().to_owned(), a);
            assert!(llt::compute::cholesky_lower(&a).1);
        }
    }
}
