//! Directed cost matrices.
//!
//! Provides a dense, possibly asymmetric cost matrix for tour problems.

mod matrix;

pub use matrix::CostMatrix;
