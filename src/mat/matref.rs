use super::{Mat, MatAccess};
use crate::assert;
use reborrow::*;

/// Immutable view over a matrix, similar to an immutable reference to a 2D strided
/// [prim@slice].
///
/// Element `(i, j)` lives at offset `i * row_stride + j * col_stride` of the underlying slice.
/// A view over a [`Mat`] has a column stride of `1`, and its transpose has a row stride of `1`.
#[derive(Copy, Clone)]
pub struct MatRef<'a> {
    data: &'a [f64],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'short> Reborrow<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        *self
    }
}

impl<'short> ReborrowMut<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        *self
    }
}

impl IntoConst for MatRef<'_> {
    type Target = Self;

    #[inline]
    fn into_const(self) -> Self::Target {
        self
    }
}

impl<'a> MatRef<'a> {
    #[inline]
    pub(crate) fn from_raw_parts(
        data: &'a [f64],
        nrows: usize,
        ncols: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Self {
        Self {
            data,
            nrows,
            ncols,
            row_stride,
            col_stride,
        }
    }

    /// Creates a `MatRef` from a slice holding a row-major `nrows×ncols` matrix.
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_row_major_slice(data: &'a [f64], nrows: usize, ncols: usize) -> Self {
        assert!(Some(data.len()) == nrows.checked_mul(ncols));
        Self {
            data,
            nrows,
            ncols,
            row_stride: ncols,
            col_stride: 1,
        }
    }

    /// Creates a `MatRef` from a slice holding a column-major `nrows×ncols` matrix.
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_column_major_slice(data: &'a [f64], nrows: usize, ncols: usize) -> Self {
        MatRef::from_row_major_slice(data, ncols, nrows).transpose()
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

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        *self
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
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

    /// Returns the `i`-th row as a slice if the row is stored contiguously, or `None` otherwise.
    ///
    /// # Panics
    /// Panics if `i >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn try_row_as_slice(self, i: usize) -> Option<&'a [f64]> {
        assert!(i < self.nrows);
        if self.ncols == 0 {
            return Some(&[]);
        }
        if self.col_stride == 1 || self.ncols == 1 {
            let start = i * self.row_stride;
            Some(&self.data[start..start + self.ncols])
        } else {
            None
        }
    }

    /// Returns a view over the transpose of `self`.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        Self {
            data: self.data,
            nrows: self.ncols,
            ncols: self.nrows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
        }
    }

    /// Returns a view over the submatrix starting at indices `(row_start, col_start)`, and with
    /// dimensions `(nrows, ncols)`.
    ///
    /// # Panics
    /// Panics if the submatrix is not fully contained in `self`.
    #[track_caller]
    pub fn submatrix(self, row_start: usize, col_start: usize, nrows: usize, ncols: usize) -> Self {
        assert!(all(
            row_start <= self.nrows,
            col_start <= self.ncols,
            nrows <= self.nrows - row_start,
            ncols <= self.ncols - col_start,
        ));
        let start = if nrows == 0 || ncols == 0 {
            0
        } else {
            self.offset(row_start, col_start)
        };
        Self {
            data: &self.data[start..],
            nrows,
            ncols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
        }
    }

    /// Returns an owning [`Mat`] of the data.
    #[inline]
    pub fn to_owned(&self) -> Mat {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self.read(i, j))
    }

    /// Returns `true` if any of the elements is NaN, otherwise returns `false`.
    pub fn has_nan(&self) -> bool {
        (0..self.nrows).any(|i| (0..self.ncols).any(|j| self.read(i, j).is_nan()))
    }

    /// Returns `true` if all of the elements are finite, otherwise returns `false`.
    pub fn is_all_finite(&self) -> bool {
        (0..self.nrows).all(|i| (0..self.ncols).all(|j| self.read(i, j).is_finite()))
    }
}

impl MatAccess for MatRef<'_> {
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
        MatRef::read(self, i, j)
    }
    #[inline]
    #[track_caller]
    fn read_row(&self, i: usize, dst: &mut [f64]) {
        assert!(dst.len() == self.ncols);
        match self.try_row_as_slice(i) {
            Some(row) => dst.copy_from_slice(row),
            None => {
                for (j, dst) in dst.iter_mut().enumerate() {
                    *dst = self.read(i, j);
                }
            }
        }
    }
}

impl PartialEq for MatRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && (0..self.nrows)
                .all(|i| (0..self.ncols).all(|j| self.read(i, j) == other.read(i, j)))
    }
}

struct DebugRow<'a>(MatRef<'a>, usize);

impl core::fmt::Debug for DebugRow<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self(mat, i) = *self;
        f.debug_list()
            .entries((0..mat.ncols()).map(|j| mat.read(i, j)))
            .finish()
    }
}

impl core::fmt::Debug for MatRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries((0..self.nrows).map(|i| DebugRow(*self, i)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat};

    #[test]
    fn strides() {
        let a = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let v = a.as_ref();
        assert!(all(v.row_stride() == 3, v.col_stride() == 1));
        let t = v.transpose();
        assert!(all(t.nrows() == 3, t.ncols() == 2));
        assert!(all(t.row_stride() == 1, t.col_stride() == 3));
        assert!(t.read(2, 1) == 6.0);
        assert!(t.try_row_as_slice(0).is_none());
        assert_eq!(v.try_row_as_slice(1), Some(&[4.0, 5.0, 6.0][..]));

        let mut row = [0.0; 2];
        t.read_row(2, &mut row);
        assert_eq!(row, [3.0, 6.0]);
    }

    #[test]
    fn column_major() {
        let data = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let v = MatRef::from_column_major_slice(&data, 2, 3);
        assert_eq!(v.to_owned(), mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn submatrix() {
        let a = Mat::from_fn(4, 5, |i, j| (10 * i + j) as f64);
        let s = a.as_ref().submatrix(1, 2, 2, 3);
        assert_eq!(s.to_owned(), mat![[12.0, 13.0, 14.0], [22.0, 23.0, 24.0]]);
        let e = a.as_ref().submatrix(4, 5, 0, 0);
        assert!(e.shape() == (0, 0));
        let st = a.transpose().submatrix(3, 1, 2, 2);
        assert_eq!(st.to_owned(), mat![[13.0, 23.0], [14.0, 24.0]]);
    }

    #[test]
    fn finiteness() {
        let mut a = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(all(!a.as_ref().has_nan(), a.as_ref().is_all_finite()));
        a.write(1, 0, f64::INFINITY);
        assert!(all(!a.as_ref().has_nan(), !a.as_ref().is_all_finite()));
        a.write(0, 1, f64::NAN);
        assert!(a.as_ref().has_nan());
    }

    #[test]
    fn debug_format() {
        let a = mat![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(format!("{a:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
    }

    #[test]
    #[should_panic]
    fn submatrix_out_of_bounds() {
        let a = Mat::zeros(2, 2);
        a.as_ref().submatrix(1, 1, 2, 1);
    }
}
