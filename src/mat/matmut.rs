use super::{Mat, MatAccess, MatAccessMut, MatRef};
use crate::assert;
use reborrow::*;

/// Mutable view over a matrix, similar to a mutable reference to a 2D strided [prim@slice].
///
/// # Move semantics
/// Since `MatMut` mutably borrows data, it cannot be [`Copy`]. This means that if we pass a
/// `MatMut` to a function that takes it by value, or use a method that consumes `self` like
/// [`MatMut::transpose_mut`], this renders the original variable unusable.
/// ```compile_fail
/// use dense_cholesky::{Mat, MatMut};
///
/// fn takes_matmut(view: MatMut<'_>) {}
///
/// let mut matrix = Mat::zeros(2, 2);
/// let view = matrix.as_mut();
///
/// takes_matmut(view); // `view` is moved (passed by value)
/// takes_matmut(view); // this fails to compile since `view` was previously moved
/// ```
///
/// The way to get around it is to use the [`reborrow::ReborrowMut`] trait, which allows us to
/// mutably borrow a `MatMut` to obtain another `MatMut` for the lifetime of the borrow.
/// It's also similarly possible to immutably borrow a `MatMut` to obtain a `MatRef` for the
/// lifetime of the borrow, using [`reborrow::Reborrow`].
/// ```
/// use dense_cholesky::{Mat, MatMut, MatRef};
/// use reborrow::*;
///
/// fn takes_matmut(view: MatMut<'_>) {}
/// fn takes_matref(view: MatRef<'_>) {}
///
/// let mut matrix = Mat::zeros(2, 2);
/// let mut view = matrix.as_mut();
///
/// takes_matmut(view.rb_mut());
/// takes_matmut(view.rb_mut());
/// takes_matref(view.rb());
/// // view is still usable here
/// ```
pub struct MatMut<'a> {
    data: &'a mut [f64],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'short> Reborrow<'short> for MatMut<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        self.as_const()
    }
}

impl<'short> ReborrowMut<'short> for MatMut<'_> {
    type Target = MatMut<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
        }
    }
}

impl<'a> IntoConst for MatMut<'a> {
    type Target = MatRef<'a>;

    #[inline]
    fn into_const(self) -> Self::Target {
        MatRef::from_raw_parts(
            self.data,
            self.nrows,
            self.ncols,
            self.row_stride,
            self.col_stride,
        )
    }
}

impl<'a> MatMut<'a> {
    /// Creates a `MatMut` from a mutable slice holding a row-major `nrows×ncols` matrix.
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_row_major_slice_mut(data: &'a mut [f64], nrows: usize, ncols: usize) -> Self {
        assert!(Some(data.len()) == nrows.checked_mul(ncols));
        Self {
            data,
            nrows,
            ncols,
            row_stride: ncols,
            col_stride: 1,
        }
    }

    /// Creates a `MatMut` from a mutable slice holding a column-major `nrows×ncols` matrix.
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_column_major_slice_mut(data: &'a mut [f64], nrows: usize, ncols: usize) -> Self {
        MatMut::from_row_major_slice_mut(data, ncols, nrows).transpose_mut()
    }

    /// Returns the number of rows of the matrix.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns of the matrix.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the number of rows and columns of the matrix.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns the offset between the first elements of two successive rows in the matrix.
    #[inline(always)]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Returns the offset between the first elements of two successive columns in the matrix.
    #[inline(always)]
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
    }

    #[inline]
    fn as_const(&self) -> MatRef<'_> {
        MatRef::from_raw_parts(
            &*self.data,
            self.nrows,
            self.ncols,
            self.row_stride,
            self.col_stride,
        )
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Panics
    /// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert!(all(row < self.nrows, col < self.ncols));
        self.data[self.offset(row, col)]
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Panics
    /// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert!(all(row < self.nrows, col < self.ncols));
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    /// Returns the `i`-th row as a mutable slice if the row is stored contiguously, or `None`
    /// otherwise.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn try_row_as_slice_mut(self, i: usize) -> Option<&'a mut [f64]> {
        assert!(i < self.nrows);
        if self.ncols == 0 {
            return Some(&mut []);
        }
        if self.col_stride == 1 || self.ncols == 1 {
            let start = i * self.row_stride;
            Some(&mut self.data[start..start + self.ncols])
        } else {
            None
        }
    }

    /// Returns a view over the transpose of `self`.
    #[inline]
    #[must_use]
    pub fn transpose_mut(self) -> Self {
        Self {
            data: self.data,
            nrows: self.ncols,
            ncols: self.nrows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
        }
    }

    /// Returns a view over the transpose of `self`.
    #[inline]
    pub fn transpose(&self) -> MatRef<'_> {
        self.rb().transpose()
    }

    /// Copies the values from `other` into `self`.
    ///
    /// # Panics
    /// Panics if the two matrices don't have the same shape.
    #[track_caller]
    pub fn copy_from(&mut self, other: impl MatAccess) {
        assert!(all(other.nrows() == self.nrows, other.ncols() == self.ncols));
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                self.write(i, j, other.read(i, j));
            }
        }
    }

    /// Fills the elements of `self` with `constant`.
    pub fn fill(&mut self, constant: f64) {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                self.write(i, j, constant);
            }
        }
    }

    /// Fills the elements of `self` with zeros.
    #[inline]
    pub fn fill_zero(&mut self) {
        self.fill(0.0)
    }

    /// Returns an owning [`Mat`] of the data.
    #[inline]
    pub fn to_owned(&self) -> Mat {
        self.rb().to_owned()
    }
}

impl MatAccess for MatMut<'_> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }
    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }
    #[inline]
    #[track_caller]
    fn read(&self, i: usize, j: usize) -> f64 {
        MatMut::read(self, i, j)
    }
    #[inline]
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        self.rb().read_row(i, dst)
    }
}

impl MatAccessMut for MatMut<'_> {
    #[inline]
    #[track_caller]
    fn write(&mut self, i: usize, j: usize, value: f64) {
        MatMut::write(self, i, j, value)
    }
    #[inline]
    #[track_caller]
    fn write_row(&mut self, i: usize, src: &[f64]) {
        assert!(src.len() == self.ncols);
        match self.rb_mut().try_row_as_slice_mut(i) {
            Some(row) => row.copy_from_slice(src),
            None => {
                for (j, &src) in src.iter().enumerate() {
                    self.write(i, j, src);
                }
            }
        }
    }
}

impl core::fmt::Debug for MatMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.rb(), f)
    }
}
