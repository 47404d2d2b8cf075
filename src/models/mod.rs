//! Domain model types for solved tours.
//!
//! A [`Tour`] is the result of an exact solve: the minimum cost, the cycle as
//! location indices and the same cycle as labels. [`Leg`] describes a single
//! directed hop of that cycle.

mod tour;

pub use tour::{Leg, Tour};
