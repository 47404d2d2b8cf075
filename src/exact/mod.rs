//! Exact solvers for the asymmetric TSP.
//!
//! - [`HeldKarp`] — Held-Karp dynamic programming over subsets, O(n²·2ⁿ)
//! - [`BruteForce`] — Exhaustive enumeration of all (n-1)! orderings, O(n·n!)
//!
//! Both solvers implement [`ExactSolver`], which validates the input, reports
//! symmetric location pairs, and wraps the search result in a [`Tour`].

mod brute_force;
mod held_karp;

pub use brute_force::BruteForce;
pub use held_karp::HeldKarp;

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::cost::CostMatrix;
use crate::error::{Result, SolverError};
use crate::models::Tour;

/// An exact tour search over a directed cost matrix.
///
/// Implementors supply [`search`](Self::search); the provided
/// [`solve`](Self::solve) handles validation, logging and result assembly.
pub trait ExactSolver: Send + Sync {
    /// Short solver name used in log events.
    fn name(&self) -> &'static str;

    /// Configuration in effect for this solver.
    fn config(&self) -> &SolverConfig;

    /// Largest instance this algorithm accepts regardless of configuration.
    fn limit(&self) -> usize;

    /// Finds the cheapest cycle through every location of `costs`, starting
    /// and ending at `start`.
    ///
    /// Called only with at least two locations and a valid `start`. Returns
    /// `(cost, route)` with the route closed at `start`, or `None` if every
    /// cycle uses an infinite edge.
    fn search(&self, costs: &CostMatrix, start: usize) -> Option<(f64, Vec<usize>)>;

    /// Solves the instance given by `costs`, naming location `i` by `labels[i]`.
    ///
    /// # Errors
    ///
    /// - [`SolverError::EmptyMatrix`] for a zero-size matrix
    /// - [`SolverError::DimensionMismatch`] if `labels.len() != costs.size()`
    /// - [`SolverError::InvalidStart`] if the configured start is out of range
    /// - [`SolverError::TooManyLocations`] above the configured or algorithmic limit
    /// - [`SolverError::InvalidCost`] if an entry is NaN or `-∞`
    /// - [`SolverError::NoFeasibleTour`] if no cycle has finite cost
    fn solve<S: AsRef<str>>(&self, costs: &CostMatrix, labels: &[S]) -> Result<Tour> {
        let config = self.config();
        let n = costs.size();
        let max = config.max_locations.min(self.limit());
        validate(costs, labels.len(), config.start, max)?;

        if config.warn_on_symmetric {
            report_symmetric_pairs(costs, labels);
        }

        // A single location is its own cycle; the diagonal is never charged.
        if n == 1 {
            return Ok(Tour::from_route(0.0, vec![config.start; 2], labels));
        }

        debug!(
            event = "solve_start",
            solver = self.name(),
            locations = n,
            start = config.start,
        );
        let started = Instant::now();

        let Some((cost, route)) = self.search(costs, config.start) else {
            warn!(
                event = "no_feasible_tour",
                solver = self.name(),
                locations = n,
            );
            return Err(SolverError::NoFeasibleTour);
        };

        info!(
            event = "solve_end",
            solver = self.name(),
            cost = cost,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(Tour::from_route(cost, route, labels))
    }
}

/// Solves `rows` with a default [`HeldKarp`] solver, starting at location 0.
///
/// # Examples
///
/// ```
/// use u_atsp::exact;
///
/// let tour = exact::solve(&[vec![0.0, 3.0], vec![5.0, 0.0]], &["Home", "Away"]).unwrap();
/// assert_eq!(tour.cost(), 8.0);
/// assert_eq!(tour.route(), &[0, 1, 0]);
/// ```
pub fn solve<R, S>(rows: &[R], labels: &[S]) -> Result<Tour>
where
    R: AsRef<[f64]>,
    S: AsRef<str>,
{
    let costs = CostMatrix::from_rows(rows)?;
    HeldKarp::default().solve(&costs, labels)
}

/// Checks the instance shape before any search work is done.
fn validate(costs: &CostMatrix, labels: usize, start: usize, max: usize) -> Result<()> {
    let size = costs.size();
    if size == 0 {
        return Err(SolverError::EmptyMatrix);
    }
    if labels != size {
        return Err(SolverError::DimensionMismatch { labels, size });
    }
    if start >= size {
        return Err(SolverError::InvalidStart { start, size });
    }
    if size > max {
        return Err(SolverError::TooManyLocations { size, max });
    }
    if let Some((from, to)) = costs.first_invalid() {
        return Err(SolverError::InvalidCost { from, to });
    }
    Ok(())
}

/// Logs one warning per pair of locations whose costs are equal both ways.
///
/// Purely advisory: equal costs are valid input.
fn report_symmetric_pairs<S: AsRef<str>>(costs: &CostMatrix, labels: &[S]) -> usize {
    let pairs = costs.symmetric_pairs();
    for &(i, j) in &pairs {
        warn!(
            from = labels[i].as_ref(),
            to = labels[j].as_ref(),
            cost = costs.get(i, j),
            "cost from {} to {} equals cost from {} to {}",
            labels[i].as_ref(),
            labels[j].as_ref(),
            labels[j].as_ref(),
            labels[i].as_ref(),
        );
    }
    pairs.len()
}
