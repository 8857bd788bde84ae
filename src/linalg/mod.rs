//! Linear algebra module.
//!
//! Contains low level routines and the implementation of their corresponding high level
//! wrappers.
//!
//! # Memory allocation
//! Some routines need temporary space for intermediate computations, and take a [`stack:
//! PodStack`](dyn_stack::PodStack) parameter for that purpose instead of allocating. A
//! [`PodStack`](dyn_stack::PodStack) is a thin wrapper over a slice of memory bytes, which may come
//! from any valid source (heap allocation, fixed-size array on the stack, etc.). The functions
//! taking a `PodStack` parameter have a corresponding function with a similar name ending in
//! `_req` that returns the memory requirements of the algorithm. For example:
//! [`cholesky::llt::compute::cholesky_lower_into`] and
//! [`cholesky::llt::compute::cholesky_lower_req`].
//!
//! The memory may be reused across calls to avoid repeated allocations. The simplest way to
//! allocate it is through [`dyn_stack::GlobalPodBuffer::new`].
//!
//! # Solving in place
//! The solvers come in two flavors: `solve_in_place`, which overwrites the right hand side with
//! the solution and does not allocate, and `solve`, which leaves the right hand side untouched
//! and returns the solution in a newly allocated [`Mat`](crate::Mat).

mod mat_ops;

pub mod cholesky;
pub mod matmul;
pub mod solvers;
pub mod triangular_solve;
