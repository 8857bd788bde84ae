//! `dense-cholesky` computes the Cholesky factorization of dense symmetric positive definite
//! matrices of `f64`, and uses it to solve linear systems $AX = B$.
//!
//! Two factorizations are provided:
//! - the lower (left) variant computes $L$ lower triangular such that $A = LL^\top$, see
//!   [`linalg::cholesky::llt`],
//! - the upper (right) variant computes $R$ upper triangular such that $A = R^\top R$, see
//!   [`linalg::cholesky::rtr`].
//!
//! Both return the factor together with a verdict stating whether the input was found to be
//! symmetric positive definite. A `false` verdict is not an error: the factor is still fully
//! computed, and non-positive pivots are clamped to zero before their square root is taken, so the
//! factor never contains NaN values produced by the factorization itself.
//!
//! The factorizations read their input through the [`MatAccess`] trait, so any dense matrix type
//! exposing its dimensions and elements can be factorized. [`Mat`] is the row-major matrix type
//! provided by this crate.
//!
//! # Example
//! ```
//! use dense_cholesky::{linalg::cholesky::llt, mat};
//!
//! let a = mat![[4.0, 2.0], [2.0, 3.0]];
//! let (l, is_spd) = llt::compute::cholesky_lower(&a);
//! assert!(is_spd);
//!
//! let mut x = mat![[1.0], [2.0]];
//! llt::solve::solve_in_place(&l, &mut x).unwrap();
//!
//! assert!((x.read(0, 0) - -0.125).abs() < 1e-12);
//! assert!((x.read(1, 0) - 0.75).abs() < 1e-12);
//! ```
//!
//! # Features
//! - `perf-warn`: logs a warning through the [`log`](https://docs.rs/log) crate the first time a
//!   routine is called with a matrix layout it handles inefficiently.
//! - `rand`: random matrix distributions in [`stats`].
//! - `serde`: serialization of [`Mat`].
//! - `nalgebra`: lets `nalgebra::DMatrix<f64>` be used wherever a [`MatAccess`] or
//!   [`MatAccessMut`] is expected.

#![cfg_attr(docsrs, feature(doc_cfg))]

use equator::assert;

pub mod linalg;
pub mod mat;

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub mod stats;

pub use dyn_stack;
pub use reborrow;

pub use linalg::{cholesky::SolveError, solvers::Cholesky};
pub use mat::{Mat, MatAccess, MatAccessMut, MatMut, MatRef, Transposed};

/// Commonly used traits for a streamlined user experience.
pub mod prelude {
    pub use crate::mat::{MatAccess, MatAccessMut};
    pub use reborrow::{IntoConst, Reborrow, ReborrowMut};
}

/// Specifies whether the triangular lower or upper part of a matrix should be accessed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Lower half should be accessed.
    Lower,
    /// Upper half should be accessed.
    Upper,
}

/// Creates a [`Mat`] containing the arguments, given row by row.
///
/// ```
/// use dense_cholesky::mat;
///
/// let matrix = mat![
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ];
///
/// assert_eq!(matrix.read(0, 0), 1.0);
/// assert_eq!(matrix.read(0, 2), 3.0);
/// assert_eq!(matrix.read(1, 0), 4.0);
/// assert_eq!(matrix.read(1, 2), 6.0);
/// ```
#[macro_export]
macro_rules! mat {
    () => {
        {
            compile_error!("number of columns in the matrix is ambiguous");
        }
    };

    ($([$($v:expr),* $(,)?] ),* $(,)?) => {
        $crate::mat::Mat::from_rows(&[$(&[$($v),*][..]),*])
    };
}

#[cfg(feature = "perf-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __perf_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}
