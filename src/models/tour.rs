//! Tour and leg types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::error::SolverError;

/// One directed hop of a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Index of the departure location.
    pub from: usize,
    /// Index of the arrival location.
    pub to: usize,
    /// Label of the departure location.
    pub from_label: String,
    /// Label of the arrival location.
    pub to_label: String,
    /// Cost of this hop.
    pub cost: f64,
}

/// A minimum-cost cycle through every location.
///
/// The route starts and ends at the start location and visits every other
/// location exactly once in between, so it holds `n + 1` indices for an
/// `n`-location problem. `labels()[k]` names `route()[k]`.
///
/// Tours are produced by the solvers in [`crate::exact`] and are immutable.
/// Deserialized tours are checked to be closed cycles over `0..n`.
///
/// # Examples
///
/// ```
/// use u_atsp::cost::CostMatrix;
/// use u_atsp::exact::{ExactSolver, HeldKarp};
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ]).unwrap();
/// let tour = HeldKarp::default().solve(&cm, &["A", "B", "C"]).unwrap();
///
/// assert_eq!(tour.to_string(), "A -> C -> B -> A");
/// let legs = tour.legs(&cm);
/// assert_eq!(legs.len(), 3);
/// assert_eq!(legs[0].cost, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TourRecord")]
pub struct Tour {
    cost: f64,
    route: Vec<usize>,
    labels: Vec<String>,
}

/// Unchecked serialized form of a [`Tour`].
#[derive(Deserialize)]
struct TourRecord {
    cost: f64,
    route: Vec<usize>,
    labels: Vec<String>,
}

impl TryFrom<TourRecord> for Tour {
    type Error = SolverError;

    fn try_from(record: TourRecord) -> Result<Self, Self::Error> {
        let TourRecord {
            cost,
            route,
            labels,
        } = record;
        if cost.is_nan() {
            return Err(SolverError::MalformedTour("cost is NaN".into()));
        }
        let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
            return Err(SolverError::MalformedTour("route is empty".into()));
        };
        if route.len() < 2 || first != last {
            return Err(SolverError::MalformedTour(
                "route does not return to its start".into(),
            ));
        }
        if labels.len() != route.len() {
            return Err(SolverError::MalformedTour(format!(
                "{} labels for a route of {} stops",
                labels.len(),
                route.len()
            )));
        }
        let n = route.len() - 1;
        let mut seen = vec![false; n];
        for &i in &route[..n] {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(SolverError::MalformedTour(format!(
                        "location {i} is out of range or visited twice"
                    )))
                }
            }
        }
        Ok(Self {
            cost,
            route,
            labels,
        })
    }
}

impl Tour {
    /// Builds a tour from a route of indices, resolving each index to its label.
    pub(crate) fn from_route<S: AsRef<str>>(cost: f64, route: Vec<usize>, labels: &[S]) -> Self {
        let labels = route
            .iter()
            .map(|&i| labels[i].as_ref().to_owned())
            .collect();
        Self {
            cost,
            route,
            labels,
        }
    }

    /// Total cost of the cycle.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The cycle as location indices, start location first and last.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// The cycle as location labels, parallel to [`route`](Self::route).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Location where the cycle starts and ends.
    pub fn start(&self) -> usize {
        self.route[0]
    }

    /// Number of hops in the cycle.
    pub fn num_legs(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Breaks the cycle into its directed hops, costed against `costs`.
    pub fn legs(&self, costs: &CostMatrix) -> Vec<Leg> {
        self.route
            .windows(2)
            .zip(self.labels.windows(2))
            .map(|(idx, names)| Leg {
                from: idx[0],
                to: idx[1],
                from_label: names[0].clone(),
                to_label: names[1].clone(),
                cost: costs.get(idx[0], idx[1]),
            })
            .collect()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" -> "))
    }
}
