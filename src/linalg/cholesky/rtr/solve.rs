use crate::{
    linalg::{
        cholesky::{check_solve_shapes, SolveError},
        triangular_solve,
    },
    Mat, MatAccess, MatAccessMut, Transposed,
};

/// Given the Cholesky factor $R$ of a matrix $A$, solves the equation $AX = B$, implicitly
/// performing the operation $B \leftarrow A^{-1}B$ by first solving $R^\top Y = B$ then
/// $RX = Y$.
///
/// Only the upper triangular part of `cholesky_factor` is accessed. No check is made for zero
/// diagonal entries.
///
/// # Errors
///
/// - Returns [`SolveError::NonSquareFactor`] if `cholesky_factor` is not a square matrix.
/// - Returns [`SolveError::DimensionMismatch`] if `rhs.nrows() != cholesky_factor.nrows()`.
///
/// `rhs` is left untouched when an error is returned.
#[track_caller]
pub fn solve_in_place<R, B>(cholesky_factor: &R, rhs: &mut B) -> Result<(), SolveError>
where
    R: MatAccess + ?Sized,
    B: MatAccessMut + ?Sized,
{
    check_solve_shapes(cholesky_factor, rhs)?;

    triangular_solve::solve_lower_triangular_in_place(&Transposed(cholesky_factor), rhs);
    triangular_solve::solve_upper_triangular_in_place(cholesky_factor, rhs);
    Ok(())
}

/// Given the Cholesky factor $R$ of a matrix $A$, returns the solution $X$ of $AX = B$, leaving
/// `rhs` untouched.
///
/// See [`solve_in_place`] for more details.
#[track_caller]
pub fn solve<R, B>(cholesky_factor: &R, rhs: &B) -> Result<Mat, SolveError>
where
    R: MatAccess + ?Sized,
    B: MatAccess + ?Sized,
{
    check_solve_shapes(cholesky_factor, rhs)?;

    let mut sol = Mat::from_fn(rhs.nrows(), rhs.ncols(), |i, j| rhs.read(i, j));
    solve_in_place(cholesky_factor, &mut sol)?;
    Ok(sol)
}
