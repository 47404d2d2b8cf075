//! Held-Karp dynamic programming for the asymmetric TSP.
//!
//! # Algorithm
//!
//! Fix a start location `s` and number the other `m = n - 1` locations
//! `0..m`. For every non-empty subset `S` of them and every `last ∈ S`,
//! let `C(S, last)` be the cheapest path that leaves `s`, visits exactly `S`
//! and ends at `last`:
//!
//! ```text
//! C({i}, i)     = d(s, i)
//! C(S, last)    = min_{p ∈ S \ {last}} C(S \ {last}, p) + d(p, last)
//! tour          = min_{last}           C(full, last) + d(last, s)
//! ```
//!
//! Subsets are bitmasks, visited in order of increasing size, so every
//! `C(S \ {last}, p)` is final before it is read. Each state stores only its
//! best predecessor; the route is recovered by one backtrack at the end.
//! Ties keep the first minimum in ascending index order.
//!
//! # Complexity
//!
//! O(n²·2ⁿ) time, O(n·2ⁿ) space.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to sequencing
//! problems", *Journal of the Society for Industrial and Applied Mathematics*
//! 10(1), 196-210.

use tracing::debug;

use crate::config::SolverConfig;
use crate::cost::CostMatrix;

use super::ExactSolver;

/// Marks a state with no predecessor (single-location paths and absent states).
const NO_PRED: u8 = u8::MAX;

/// Exact ATSP solver using Held-Karp dynamic programming.
///
/// # Examples
///
/// ```
/// use u_atsp::config::SolverConfig;
/// use u_atsp::cost::CostMatrix;
/// use u_atsp::exact::{ExactSolver, HeldKarp};
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 25481.0, 42484.0, 35005.0, 25035.0],
///     vec![28738.0, 0.0, 13867.0, 11611.0, 6022.0],
///     vec![54545.0, 11989.0, 0.0, 5074.0, 5262.0],
///     vec![36057.0, 9002.0, 8038.0, 0.0, 4110.0],
///     vec![31297.0, 3948.0, 5263.0, 4840.0, 0.0],
/// ]).unwrap();
/// let cities = ["Kochi", "Paris", "Cologne", "Zurich", "Rome"];
///
/// let tour = HeldKarp::default().solve(&cm, &cities).unwrap();
/// assert_eq!(tour.route().len(), 6);
/// assert_eq!(tour.labels()[0], "Kochi");
/// assert!((cm.route_cost(tour.route()) - tour.cost()).abs() < 1e-9);
///
/// // Same instance, starting from Rome instead.
/// let from_rome = HeldKarp::new(SolverConfig::new().with_start(4));
/// let tour = from_rome.solve(&cm, &cities).unwrap();
/// assert_eq!(tour.start(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeldKarp {
    config: SolverConfig,
}

impl HeldKarp {
    /// Largest number of locations the solver will attempt.
    ///
    /// The tables hold `(n-1)·2^(n-1)` states; at 25 locations that is about
    /// 400 million.
    pub const MAX_LOCATIONS: usize = 25;

    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl ExactSolver for HeldKarp {
    fn name(&self) -> &'static str {
        "held_karp"
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn limit(&self) -> usize {
        Self::MAX_LOCATIONS
    }

    fn search(&self, costs: &CostMatrix, start: usize) -> Option<(f64, Vec<usize>)> {
        let n = costs.size();
        let others: Vec<usize> = (0..n).filter(|&i| i != start).collect();
        let m = others.len();
        let full = (1usize << m) - 1;

        let mut table = Table::new(m);

        for (k, &loc) in others.iter().enumerate() {
            table.set(1 << k, k, costs.get(start, loc), NO_PRED);
        }

        for size in 2..=m {
            for mask in subsets_of_size(m, size) {
                for last in bits(mask) {
                    let prev = mask & !(1 << last);
                    let mut best = f64::INFINITY;
                    let mut best_pred = NO_PRED;

                    for p in bits(prev) {
                        let cand = table.cost(prev, p) + costs.get(others[p], others[last]);
                        if cand < best {
                            best = cand;
                            best_pred = p as u8;
                        }
                    }

                    if best_pred != NO_PRED {
                        table.set(mask, last, best, best_pred);
                    }
                }
            }
        }

        debug!(event = "table_filled", solver = self.name(), states = m << m);

        let mut best = f64::INFINITY;
        let mut best_last = None;
        for last in 0..m {
            let cand = table.cost(full, last) + costs.get(others[last], start);
            if cand < best {
                best = cand;
                best_last = Some(last);
            }
        }

        let last = best_last?;
        Some((best, table.backtrack(full, last, &others, start)))
    }
}

/// DP storage indexed by `(mask, last)`.
///
/// Absent states keep an infinite cost, so they never win a comparison.
struct Table {
    m: usize,
    cost: Vec<f64>,
    pred: Vec<u8>,
}

impl Table {
    fn new(m: usize) -> Self {
        let states = m << m;
        Self {
            m,
            cost: vec![f64::INFINITY; states],
            pred: vec![NO_PRED; states],
        }
    }

    fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.m + last
    }

    fn cost(&self, mask: usize, last: usize) -> f64 {
        self.cost[self.index(mask, last)]
    }

    fn set(&mut self, mask: usize, last: usize, cost: f64, pred: u8) {
        let i = self.index(mask, last);
        self.cost[i] = cost;
        self.pred[i] = pred;
    }

    /// Follows predecessor pointers from `(mask, last)` back to a single
    /// location and returns the closed route in original indices.
    fn backtrack(
        &self,
        mut mask: usize,
        mut last: usize,
        others: &[usize],
        start: usize,
    ) -> Vec<usize> {
        let mut route = Vec::with_capacity(others.len() + 2);
        route.push(start);
        loop {
            route.push(others[last]);
            let pred = self.pred[self.index(mask, last)];
            if pred == NO_PRED {
                break;
            }
            mask &= !(1 << last);
            last = pred as usize;
        }
        route.push(start);
        route[1..=others.len()].reverse();
        route
    }
}

/// Iterates over all `m`-bit masks with exactly `size` bits set, ascending
/// (Gosper's hack).
fn subsets_of_size(m: usize, size: usize) -> impl Iterator<Item = usize> {
    let limit = 1usize << m;
    let first = (1usize << size) - 1;
    std::iter::successors(Some(first), move |&x| {
        let low = x & x.wrapping_neg();
        let ripple = x + low;
        let next = (((ripple ^ x) >> 2) / low) | ripple;
        (next < limit).then_some(next)
    })
}

/// Iterates over the set bit positions of `mask`, ascending.
fn bits(mut mask: usize) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let bit = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(bit)
    })
}
