use crate::{assert, linalg::matmul::matmul, Mat, MatRef};

use core::ops::{Add, Mul, Neg, Sub};

macro_rules! impl_add_sub {
    ($lhs: ty, $rhs: ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn add(self, other: $rhs) -> Self::Output {
                self.as_ref().add(other.as_ref())
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn sub(self, other: $rhs) -> Self::Output {
                self.as_ref().sub(other.as_ref())
            }
        }
    };
}

macro_rules! impl_mul {
    ($lhs: ty, $rhs: ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn mul(self, other: $rhs) -> Self::Output {
                self.as_ref().mul(other.as_ref())
            }
        }
    };
}

impl Add<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn add(self, rhs: MatRef<'_>) -> Self::Output {
        let lhs = self;
        assert!(all(lhs.nrows() == rhs.nrows(), lhs.ncols() == rhs.ncols()));
        Mat::from_fn(lhs.nrows(), lhs.ncols(), |i, j| lhs.read(i, j) + rhs.read(i, j))
    }
}

impl Sub<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn sub(self, rhs: MatRef<'_>) -> Self::Output {
        let lhs = self;
        assert!(all(lhs.nrows() == rhs.nrows(), lhs.ncols() == rhs.ncols()));
        Mat::from_fn(lhs.nrows(), lhs.ncols(), |i, j| lhs.read(i, j) - rhs.read(i, j))
    }
}

impl Mul<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn mul(self, rhs: MatRef<'_>) -> Self::Output {
        let lhs = self;
        assert!(lhs.ncols() == rhs.nrows());
        let mut out = Mat::zeros(lhs.nrows(), rhs.ncols());
        matmul(out.as_mut(), lhs, rhs, None, 1.0);
        out
    }
}

impl Neg for MatRef<'_> {
    type Output = Mat;

    fn neg(self) -> Self::Output {
        let this = self;
        Mat::from_fn(this.nrows(), this.ncols(), |i, j| -this.read(i, j))
    }
}

impl Neg for &Mat {
    type Output = Mat;

    fn neg(self) -> Self::Output {
        self.as_ref().neg()
    }
}

impl_add_sub!(MatRef<'_>, &Mat);
impl_add_sub!(&Mat, MatRef<'_>);
impl_add_sub!(&Mat, &Mat);

impl_mul!(MatRef<'_>, &Mat);
impl_mul!(&Mat, MatRef<'_>);
impl_mul!(&Mat, &Mat);
