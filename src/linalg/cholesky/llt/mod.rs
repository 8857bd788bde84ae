//! The lower Cholesky decomposition of a symmetric positive definite matrix $A$ is such that:
//! $$A = LL^\top,$$
//! where $L$ is a lower triangular matrix with a positive diagonal.

/// Computing the decomposition.
pub mod compute;
/// Reconstructing the original matrix from the decomposition.
pub mod reconstruct;
/// Solving a linear system using the decomposition.
pub mod solve;
