//! Reverse-mode differentiation over the scalar graph.
//!
//! `graph` holds the topological traversal, the backward pass, and the
//! gradient-descent update step; `grad_check` verifies analytical gradients
//! against finite differences.

pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::{backward, update};
