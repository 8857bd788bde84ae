use super::{MatAccess, MatAccessMut, MatMut, MatRef};
use crate::assert;

/// Heap allocated matrix of `f64`, similar to a 2D [`Vec`].
///
/// # Note
///
/// The memory layout of `Mat` is guaranteed to be row-major and contiguous, meaning that element
/// `(i, j)` is stored at offset `i * ncols + j`, and each row can be borrowed as a slice with
/// [`Mat::row`].
///
/// Let us consider a 3×4 matrix
///
/// ```notcode
///  0 │ 1 │  2 │  3
/// ───┼───┼────┼───
///  4 │ 5 │  6 │  7
/// ───┼───┼────┼───
///  8 │ 9 │ 10 │ 11
/// ```
/// The memory representation of the data held by such a matrix is:
///
/// ```notcode
/// 0 1 2 3 4 5 6 7 8 9 10 11
/// ```
#[derive(Clone, Default)]
pub struct Mat {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Mat {
    /// Returns an empty matrix of dimension `0×0`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with the provided function.
    ///
    /// # Panics
    /// The function panics if `nrows * ncols` overflows.
    #[track_caller]
    pub fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut f = f;
        let len = nrows.checked_mul(ncols);
        assert!(len.is_some());
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros.
    #[inline]
    #[track_caller]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| 0.0)
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros, except the main
    /// diagonal which is filled with ones.
    #[inline]
    #[track_caller]
    #[doc(alias = "eye")]
    pub fn identity(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Returns a new matrix whose `i`-th row is `rows[i]`.
    ///
    /// # Panics
    /// Panics if the rows don't all have the same length.
    #[track_caller]
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            assert!(row.len() == ncols);
            data.extend_from_slice(row);
        }
        Self { data, nrows, ncols }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)` taking ownership of `data`, which is
    /// interpreted in row-major order.
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`.
    #[track_caller]
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<f64>) -> Self {
        assert!(Some(data.len()) == nrows.checked_mul(ncols));
        Self { data, nrows, ncols }
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

    /// Returns the underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the underlying row-major storage.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major storage.
    #[inline]
    pub fn into_row_major(self) -> Vec<f64> {
        self.data
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Panics
    /// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert!(all(row < self.nrows, col < self.ncols));
        self.data[row * self.ncols + col]
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Panics
    /// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert!(all(row < self.nrows, col < self.ncols));
        self.data[row * self.ncols + col] = value;
    }

    /// Returns the `i`-th row as a slice.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Returns the `i`-th row as a mutable slice.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.nrows);
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        MatRef::from_row_major_slice(&self.data, self.nrows, self.ncols)
    }

    /// Returns a mutable view over the matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_> {
        MatMut::from_row_major_slice_mut(&mut self.data, self.nrows, self.ncols)
    }

    /// Returns a view over the transpose of `self`.
    #[inline]
    pub fn transpose(&self) -> MatRef<'_> {
        self.as_ref().transpose()
    }

    /// Copies the values from `other` into `self`.
    ///
    /// # Panics
    /// Panics if the two matrices don't have the same shape.
    #[track_caller]
    pub fn copy_from(&mut self, other: impl MatAccess) {
        self.as_mut().copy_from(other)
    }

    /// Fills the elements of `self` with zeros.
    #[inline]
    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Resizes the matrix in-place so that the new dimensions are `(new_nrows, new_ncols)`.
    /// Elements that are now out of bounds are dropped, while new elements are created with the
    /// given function `f`, so that elements at indices `(i, j)` are created by calling `f(i, j)`.
    pub fn resize_with(
        &mut self,
        new_nrows: usize,
        new_ncols: usize,
        f: impl FnMut(usize, usize) -> f64,
    ) {
        let mut f = f;
        let old = core::mem::take(self);
        *self = Self::from_fn(new_nrows, new_ncols, |i, j| {
            if i < old.nrows && j < old.ncols {
                old.data[i * old.ncols + j]
            } else {
                f(i, j)
            }
        });
    }
}

impl MatAccess for Mat {
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
        Mat::read(self, i, j)
    }
    #[inline]
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        dst.copy_from_slice(self.row(i));
    }
}

impl MatAccessMut for Mat {
    #[inline]
    #[track_caller]
    fn write(&mut self, i: usize, j: usize, value: f64) {
        Mat::write(self, i, j, value)
    }
    #[inline]
    #[track_caller]
    fn write_row(&mut self, i: usize, src: &[f64]) {
        self.row_mut(i).copy_from_slice(src);
    }
}

impl PartialEq for Mat {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl core::fmt::Debug for Mat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.as_ref(), f)
    }
}
