use crate::{
    linalg::{
        cholesky::{check_solve_shapes, SolveError},
        triangular_solve,
    },
    Mat, MatAccess, MatAccessMut, Transposed,
};

/// Given the Cholesky factor $L$ of a matrix $A$, solves the equation $AX = B$, implicitly
/// performing the operation $B \leftarrow A^{-1}B$ by first solving $LY = B$ then
/// $L^\top X = Y$.
///
/// Only the lower triangular part of `cholesky_factor` is accessed. No check is made for zero
/// diagonal entries.
///
/// # Errors
///
/// - Returns [`SolveError::NonSquareFactor`] if `cholesky_factor` is not a square matrix.
/// - Returns [`SolveError::DimensionMismatch`] if `rhs.nrows() != cholesky_factor.nrows()`.
///
/// `rhs` is left untouched when an error is returned.
#[track_caller]
pub fn solve_in_place<L, B>(cholesky_factor: &L, rhs: &mut B) -> Result<(), SolveError>
where
    L: MatAccess + ?Sized,
    B: MatAccessMut + ?Sized,
{
    check_solve_shapes(cholesky_factor, rhs)?;

    triangular_solve::solve_lower_triangular_in_place(cholesky_factor, rhs);
    triangular_solve::solve_upper_triangular_in_place(&Transposed(cholesky_factor), rhs);
    Ok(())
}

/// Given the Cholesky factor $L$ of a matrix $A$, returns the solution $X$ of $AX = B$, leaving
/// `rhs` untouched.
///
/// See [`solve_in_place`] for more details.
#[track_caller]
pub fn solve<L, B>(cholesky_factor: &L, rhs: &B) -> Result<Mat, SolveError>
where
    L: MatAccess + ?Sized,
    B: MatAccess + ?Sized,
{
    check_solve_shapes(cholesky_factor, rhs)?;

    let mut sol = Mat::from_fn(rhs.nrows(), rhs.ncols(), |i, j| rhs.read(i, j));
    solve_in_place(cholesky_factor, &mut sol)?;
    Ok(sol)
}
