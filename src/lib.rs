//! # u-atsp
//!
//! Exact solver for the Asymmetric Traveling Salesman Problem (ATSP).
//!
//! Given a directed cost matrix, where the cost from A to B may differ from
//! the cost from B to A, finds the cheapest cycle that leaves a start
//! location, visits every other location exactly once and returns.
//!
//! ## Modules
//!
//! - [`cost`] — Dense directed cost matrix
//! - [`models`] — Solved tour and its legs
//! - [`exact`] — Held-Karp dynamic programming and a brute-force reference
//! - [`config`] — Solver configuration (TOML)
//! - [`instance`] — Seeded synthetic instances
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_atsp::exact;
//!
//! let cost = vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![1.0, 0.0, 3.0],
//!     vec![4.0, 3.0, 0.0],
//! ];
//! let tour = exact::solve(&cost, &["A", "B", "C"]).unwrap();
//! assert_eq!(tour.cost(), 6.0);
//! assert_eq!(tour.route(), &[0, 2, 1, 0]);
//! assert_eq!(tour.labels(), &["A", "C", "B", "A"]);
//! ```

pub mod config;
pub mod cost;
pub mod error;
pub mod exact;
pub mod instance;
pub mod models;

pub use error::{Result, SolverError};
