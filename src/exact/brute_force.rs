//! Exhaustive enumeration of every tour.
//!
//! Walks all (n-1)! orderings of the non-start locations with Heap's
//! algorithm and keeps the first strictly cheaper closed tour. Only usable for
//! a handful of locations, but independent of the dynamic program, which makes
//! it a reference for checking [`HeldKarp`](super::HeldKarp).
//!
//! # Complexity
//!
//! O(n·n!) time, O(n) space.
//!
//! # Reference
//!
//! Heap, B.R. (1963). "Permutations by interchanges", *The Computer Journal*
//! 6(3), 293-294.

use crate::config::SolverConfig;
use crate::cost::CostMatrix;

use super::ExactSolver;

/// Exact ATSP solver that tries every ordering.
///
/// # Examples
///
/// ```
/// use u_atsp::cost::CostMatrix;
/// use u_atsp::exact::{BruteForce, ExactSolver};
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ]).unwrap();
/// let tour = BruteForce::default().solve(&cm, &["A", "B", "C"]).unwrap();
/// assert_eq!(tour.cost(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    config: SolverConfig,
}

impl BruteForce {
    /// Largest number of locations the solver will attempt (9! orderings).
    pub const MAX_LOCATIONS: usize = 10;

    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl ExactSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn limit(&self) -> usize {
        Self::MAX_LOCATIONS
    }

    fn search(&self, costs: &CostMatrix, start: usize) -> Option<(f64, Vec<usize>)> {
        let mut order: Vec<usize> = (0..costs.size()).filter(|&i| i != start).collect();
        let k = order.len();

        let mut best = f64::INFINITY;
        let mut best_order: Option<Vec<usize>> = None;
        let mut consider = |order: &[usize]| {
            let cost = closed_cost(costs, start, order);
            if cost < best {
                best = cost;
                best_order = Some(order.to_vec());
            }
        };

        // Heap's algorithm, iterative form.
        let mut counters = vec![0usize; k];
        consider(&order);
        let mut i = 1;
        while i < k {
            if counters[i] < i {
                if i % 2 == 0 {
                    order.swap(0, i);
                } else {
                    order.swap(counters[i], i);
                }
                consider(&order);
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }

        let interior = best_order?;
        let mut route = Vec::with_capacity(k + 2);
        route.push(start);
        route.extend(interior);
        route.push(start);
        Some((best, route))
    }
}

/// Cost of `start → order[0] → … → order[k-1] → start`.
fn closed_cost(costs: &CostMatrix, start: usize, order: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let inner: f64 = order.windows(2).map(|w| costs.get(w[0], w[1])).sum();
    costs.get(start, first) + inner + costs.get(last, start)
}
