//! High level solver wrapping the Cholesky decompositions.

use crate::{
    linalg::cholesky::{llt, rtr, SolveError},
    Mat, MatAccess, MatAccessMut, MatRef, Side,
};

/// Cholesky decomposition.
///
/// Depending on the [`Side`] it was computed with, the stored factor is either the lower
/// triangular $L$ such that $A = LL^\top$, or the upper triangular $R$ such that $A = R^\top R$.
///
/// Unlike the low level routines in [`crate::linalg::cholesky`], constructing a `Cholesky` never
/// fails: whether the input was symmetric positive definite is recorded and can be queried with
/// [`Cholesky::is_spd`]. Solving with a decomposition of a matrix that is not symmetric positive
/// definite logs a warning.
#[derive(Clone, Debug)]
pub struct Cholesky {
    factor: Mat,
    side: Side,
    is_spd: bool,
}

impl Cholesky {
    /// Returns the Cholesky decomposition of the input matrix, computing the factor on the given
    /// side.
    ///
    /// # Panics
    ///
    /// Panics if `matrix.nrows() < matrix.ncols()`.
    ///
    /// # Example
    ///
    /// ```
    /// use dense_cholesky::{mat, Cholesky, Side};
    ///
    /// let a = mat![[4.0, 2.0], [2.0, 3.0]];
    /// let chol = Cholesky::new(&a, Side::Upper);
    /// assert!(chol.is_spd());
    ///
    /// let x = chol.solve(&mat![[1.0], [2.0]]).unwrap();
    /// assert!((x.read(0, 0) + 0.125).abs() < 1e-12);
    /// assert!((x.read(1, 0) - 0.75).abs() < 1e-12);
    /// ```
    #[track_caller]
    pub fn new<A: MatAccess + ?Sized>(matrix: &A, side: Side) -> Self {
        let (factor, is_spd) = match side {
            Side::Lower => llt::compute::cholesky_lower(matrix),
            Side::Upper => rtr::compute::cholesky_upper(matrix),
        };
        Self {
            factor,
            side,
            is_spd,
        }
    }

    /// Returns `true` if the input matrix was found to be symmetric positive definite.
    #[inline]
    pub fn is_spd(&self) -> bool {
        self.is_spd
    }

    /// Returns the side of the stored factor.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the dimension of the decomposed matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor.nrows()
    }

    /// Returns a view over the stored factor.
    #[inline]
    pub fn factor(&self) -> MatRef<'_> {
        self.factor.as_ref()
    }

    /// Consumes the decomposition and returns the stored factor.
    #[inline]
    pub fn into_factor(self) -> Mat {
        self.factor
    }

    /// Returns the lower triangular factor $L$ such that $A = LL^\top$, regardless of the side
    /// the decomposition was computed with.
    pub fn compute_l(&self) -> Mat {
        match self.side {
            Side::Lower => self.factor.clone(),
            Side::Upper => self.factor.transpose().to_owned(),
        }
    }

    fn warn_if_not_spd(&self) {
        if !self.is_spd {
            log::warn!(
                "solving with the Cholesky decomposition of a matrix that is not symmetric positive definite (dimension {})",
                self.dim()
            );
        }
    }

    /// Solves the equation $AX = B$, and stores the result in `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if `rhs.nrows() != self.dim()`, in which case
    /// `rhs` is left untouched.
    #[track_caller]
    pub fn solve_in_place<B: MatAccessMut + ?Sized>(&self, rhs: &mut B) -> Result<(), SolveError> {
        self.warn_if_not_spd();
        match self.side {
            Side::Lower => llt::solve::solve_in_place(&self.factor, rhs),
            Side::Upper => rtr::solve::solve_in_place(&self.factor, rhs),
        }
    }

    /// Returns the solution $X$ of $AX = B$.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if `rhs.nrows() != self.dim()`.
    #[track_caller]
    pub fn solve<B: MatAccess + ?Sized>(&self, rhs: &B) -> Result<Mat, SolveError> {
        self.warn_if_not_spd();
        match self.side {
            Side::Lower => llt::solve::solve(&self.factor, rhs),
            Side::Upper => rtr::solve::solve(&self.factor, rhs),
        }
    }

    /// Returns the product of the factor with its transpose, in the order that reconstructs the
    /// decomposed matrix.
    pub fn reconstruct(&self) -> Mat {
        let n = self.dim();
        let mut dst = Mat::zeros(n, n);
        match self.side {
            Side::Lower => llt::reconstruct::reconstruct_lower(dst.as_mut(), self.factor.as_ref()),
            Side::Upper => rtr::reconstruct::reconstruct_upper(dst.as_mut(), self.factor.as_ref()),
        }
        dst
    }

    /// Returns the inverse of the decomposed matrix, computed by solving $AX = I$.
    pub fn inverse(&self) -> Mat {
        let mut inv = Mat::identity(self.dim(), self.dim());
        let solved = match self.side {
            Side::Lower => llt::solve::solve_in_place(&self.factor, &mut inv),
            Side::Upper => rtr::solve::solve_in_place(&self.factor, &mut inv),
        };
        solved.expect("the stored factor is square and matches the identity");
        inv
    }
}

impl Mat {
    /// Returns the Cholesky decomposition of `self`. See [`Cholesky::new`].
    #[track_caller]
    pub fn cholesky(&self, side: Side) -> Cholesky {
        Cholesky::new(self, side)
    }
}

impl MatRef<'_> {
    /// Returns the Cholesky decomposition of `self`. See [`Cholesky::new`].
    #[track_caller]
    pub fn cholesky(&self, side: Side) -> Cholesky {
        Cholesky::new(self, side)
    }
}
