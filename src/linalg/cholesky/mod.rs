//! Cholesky decompositions of dense symmetric positive definite matrices, and solving linear
//! systems with them.
//!
//! Both variants read their input through [`MatAccess`], factorize the leading `n×n` block where
//! `n` is the number of columns, and report whether the input was found to be symmetric positive
//! definite. The verdict is `false` when:
//! - the input has more rows than columns,
//! - the input is not exactly symmetric (no tolerance is applied),
//! - some pivot is not strictly positive. Such a pivot is clamped to zero before taking its square
//!   root, and the entries that would be divided by it are set to zero.

use crate::MatAccess;

pub mod llt;
pub mod rtr;

/// Error returned when solving a linear system with a Cholesky factor whose shape is not
/// compatible with the right hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The factor is not a square matrix.
    NonSquareFactor {
        /// Number of rows of the factor.
        nrows: usize,
        /// Number of columns of the factor.
        ncols: usize,
    },
    /// The number of rows of the right hand side differs from the dimension of the factor.
    DimensionMismatch {
        /// Dimension of the factor.
        expected: usize,
        /// Number of rows of the right hand side.
        found: usize,
    },
}

impl core::fmt::Display for SolveError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for SolveError {}

/// Checks that `factor` is square and that its dimension matches the number of rows of `rhs`,
/// returning that dimension.
///
/// The squareness check comes first, so a non square factor is always reported as such.
pub(crate) fn check_solve_shapes<F, B>(factor: &F, rhs: &B) -> Result<usize, SolveError>
where
    F: MatAccess + ?Sized,
    B: MatAccess + ?Sized,
{
    let (nrows, ncols) = (factor.nrows(), factor.ncols());
    if nrows != ncols {
        return Err(SolveError::NonSquareFactor { nrows, ncols });
    }
    if rhs.nrows() != nrows {
        return Err(SolveError::DimensionMismatch {
            expected: nrows,
            found: rhs.nrows(),
        });
    }
    Ok(nrows)
}
