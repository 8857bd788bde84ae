//! Dense matrix storage and the element access traits the factorizations are written against.
//!
//! The algorithms in [`crate::linalg`] only need a small capability surface from a matrix: its
//! dimensions, single element reads and writes, and (optionally, for efficiency) whole-row reads
//! and writes. This is captured by [`MatAccess`] and [`MatAccessMut`], so that any array-backed
//! type implementing them can be handed to the factorizations and solvers.
//!
//! [`Mat`] is the owned row-major container provided by this crate. [`MatRef`] and [`MatMut`] are
//! lightweight strided views into it, which allow implicit transposition.

use crate::assert;

mod matmut;
mod matown;
mod matref;

#[cfg(feature = "nalgebra")]
#[cfg_attr(docsrs, doc(cfg(feature = "nalgebra")))]
mod nalgebra_impl;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_impl;

pub use matmut::MatMut;
pub use matown::Mat;
pub use matref::MatRef;

/// Read access to the elements of a dense matrix of `f64`.
///
/// Indices are zero-based. Reading outside of `0..nrows()` × `0..ncols()` is a programmer error
/// and implementations are expected to panic.
pub trait MatAccess {
    /// Returns the number of rows of the matrix.
    fn nrows(&self) -> usize;
    /// Returns the number of columns of the matrix.
    fn ncols(&self) -> usize;
    /// Returns the element at row `i` and column `j`.
    fn read(&self, i: usize, j: usize) -> f64;

    /// Copies the row `i` into `dst`.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()` or `dst.len() != self.ncols()`.
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        assert!(all(i < self.nrows(), dst.len() == self.ncols()));
        for (j, dst) in dst.iter_mut().enumerate() {
            *dst = self.read(i, j);
        }
    }
}

/// Write access to the elements of a dense matrix of `f64`.
pub trait MatAccessMut: MatAccess {
    /// Writes `value` to the element at row `i` and column `j`.
    fn write(&mut self, i: usize, j: usize, value: f64);

    /// Overwrites the row `i` with the contents of `src`.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()` or `src.len() != self.ncols()`.
    #[track_caller]
    fn write_row(&mut self, i: usize, src: &[f64]) {
        assert!(all(i < self.nrows(), src.len() == self.ncols()));
        for (j, &src) in src.iter().enumerate() {
            self.write(i, j, src);
        }
    }
}

impl<M: MatAccess + ?Sized> MatAccess for &M {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }
    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }
    #[inline]
    #[track_caller]
    fn read(&self, i: usize, j: usize) -> f64 {
        (**self).read(i, j)
    }
    #[inline]
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        (**self).read_row(i, dst)
    }
}

impl<M: MatAccess + ?Sized> MatAccess for &mut M {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }
    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }
    #[inline]
    #[track_caller]
    fn read(&self, i: usize, j: usize) -> f64 {
        (**self).read(i, j)
    }
    #[inline]
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        (**self).read_row(i, dst)
    }
}

impl<M: MatAccessMut + ?Sized> MatAccessMut for &mut M {
    #[inline]
    #[track_caller]
    fn write(&mut self, i: usize, j: usize, value: f64) {
        (**self).write(i, j, value)
    }
    #[inline]
    #[track_caller]
    fn write_row(&mut self, i: usize, src: &[f64]) {
        (**self).write_row(i, src)
    }
}

/// Implicitly transposed read-only view over any [`MatAccess`] implementor.
///
/// Element `(i, j)` of the view is element `(j, i)` of the wrapped matrix.
#[derive(Copy, Clone, Debug)]
pub struct Transposed<'a, M: ?Sized>(pub &'a M);

impl<M: MatAccess + ?Sized> MatAccess for Transposed<'_, M> {
    #[inline]
    fn nrows(&self) -> usize {
        self.0.ncols()
    }
    #[inline]
    fn ncols(&self) -> usize {
        self.0.nrows()
    }
    #[inline]
    #[track_caller]
    fn read(&self, i: usize, j: usize) -> f64 {
        self.0.read(j, i)
    }
}
