//! Triangular solve module.
//!
//! The routines here are generic over [`MatAccess`]/[`MatAccessMut`], so that the triangular
//! matrix may be an implicitly transposed view such as [`Transposed`](crate::Transposed).
//!
//! No check is made for zero diagonal entries: dividing by them follows IEEE 754 semantics, and
//! may produce infinite or NaN values in the solution.

use crate::{assert, MatAccess, MatAccessMut};

/// Computes the solution of `triangular_lower×X = rhs`, and stores the result in
/// `rhs`.
///
/// `triangular_lower` is interpreted as a lower triangular matrix (diagonal included).
/// Its strictly upper triangular part is not accessed.
///
/// # Panics
///
/// - Panics if `triangular_lower` is not a square matrix.
/// - Panics if `rhs.nrows() != triangular_lower.ncols()`.
#[track_caller]
pub fn solve_lower_triangular_in_place<T, B>(triangular_lower: &T, rhs: &mut B)
where
    T: MatAccess + ?Sized,
    B: MatAccessMut + ?Sized,
{
    let n = triangular_lower.nrows();
    assert!(all(
        triangular_lower.ncols() == n,
        rhs.nrows() == triangular_lower.ncols(),
    ));

    let k = rhs.ncols();
    for i in 0..n {
        let diag = triangular_lower.read(i, i);
        for j in 0..k {
            let mut x = rhs.read(i, j);
            for p in 0..i {
                x -= rhs.read(p, j) * triangular_lower.read(i, p);
            }
            rhs.write(i, j, x / diag);
        }
    }
}

/// Computes the solution of `triangular_upper×X = rhs`, and stores the result in
/// `rhs`.
///
/// `triangular_upper` is interpreted as an upper triangular matrix (diagonal included).
/// Its strictly lower triangular part is not accessed.
///
/// # Panics
///
/// - Panics if `triangular_upper` is not a square matrix.
/// - Panics if `rhs.nrows() != triangular_upper.ncols()`.
#[track_caller]
pub fn solve_upper_triangular_in_place<T, B>(triangular_upper: &T, rhs: &mut B)
where
    T: MatAccess + ?Sized,
    B: MatAccessMut + ?Sized,
{
    let n = triangular_upper.nrows();
    assert!(all(
        triangular_upper.ncols() == n,
        rhs.nrows() == triangular_upper.ncols(),
    ));

    let k = rhs.ncols();
    for i in (0..n).rev() {
        let diag = triangular_upper.read(i, i);
        for j in 0..k {
            let mut x = rhs.read(i, j);
            for p in i + 1..n {
                x -= rhs.read(p, j) * triangular_upper.read(i, p);
            }
            rhs.write(i, j, x / diag);
        }
    }
}
