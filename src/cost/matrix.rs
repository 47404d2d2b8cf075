//! Dense directed cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// A dense n×n directed cost matrix stored in row-major order.
///
/// `get(i, j)` is the cost of travelling directly from location `i` to
/// location `j`; it need not equal `get(j, i)`. Diagonal entries are never
/// read by the solvers. `f64::INFINITY` marks a missing edge; NaN and
/// `f64::NEG_INFINITY` are not valid costs.
///
/// Serializes as a list of rows and validates on deserialization.
///
/// # Examples
///
/// ```
/// use u_atsp::cost::CostMatrix;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 10.0],
///     vec![15.0, 0.0],
/// ]).unwrap();
/// assert_eq!(cm.size(), 2);
/// assert_eq!(cm.get(0, 1), 10.0);
/// assert_eq!(cm.get(1, 0), 15.0);
/// assert!(cm.symmetric_pairs().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// - [`SolverError::EmptyMatrix`] if there are no rows
    /// - [`SolverError::NotSquare`] if any row length differs from the row count
    /// - [`SolverError::InvalidCost`] if any entry is NaN or negative infinity
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SolverError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(SolverError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            if let Some(to) = values.iter().position(|&c| !is_valid_cost(c)) {
                return Err(SolverError::InvalidCost { from: row, to });
            }
            data.extend_from_slice(values);
        }

        Ok(Self { data, size })
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of travelling from `from` to `to`.
    ///
    /// The value is not checked here; the solvers reject invalid entries via
    /// [`first_invalid`](Self::first_invalid) before searching.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the first `(from, to)` whose cost is NaN or negative infinity,
    /// in row-major order.
    pub fn first_invalid(&self) -> Option<(usize, usize)> {
        let k = self.data.iter().position(|&c| !is_valid_cost(c))?;
        Some((k / self.size, k % self.size))
    }

    /// Returns every unordered pair `(i, j)`, `i < j`, whose costs are exactly
    /// equal in both directions.
    pub fn symmetric_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) == self.get(j, i) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Sums the cost of consecutive hops along `route`.
    ///
    /// A route with fewer than two locations costs zero.
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

/// Finite values and `+∞` (missing edge) are valid.
fn is_valid_cost(c: f64) -> bool {
    !c.is_nan() && c != f64::NEG_INFINITY
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = SolverError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(cm: CostMatrix) -> Self {
        cm.data.chunks(cm.size.max(1)).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, 3.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let cm = sample();
        assert_eq!(cm.size(), 3);
        assert_eq!(cm.get(0, 2), 2.0);
        assert_eq!(cm.get(2, 0), 4.0);
        assert_eq!(cm.get(1, 2), 3.0);
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<f64>> = vec![];
        assert_eq!(CostMatrix::from_rows(&rows), Err(SolverError::EmptyMatrix));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            SolverError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            }
        );
    }

    #[test]
    fn test_from_rows_nan() {
        let err = CostMatrix::from_rows(&[vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(err, SolverError::InvalidCost { from: 0, to: 1 });
    }

    #[test]
    fn test_from_rows_neg_infinity() {
        let err = CostMatrix::from_rows(&[
            vec![0.0, f64::NEG_INFINITY, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap_err();
        assert_eq!(err, SolverError::InvalidCost { from: 0, to: 1 });
    }

    #[test]
    fn test_first_invalid() {
        let mut cm = sample();
        assert_eq!(cm.first_invalid(), None);
        cm.set(2, 0, f64::NEG_INFINITY);
        cm.set(0, 2, f64::NAN);
        assert_eq!(cm.first_invalid(), Some((0, 2)));
    }

    #[test]
    fn test_infinity_allowed() {
        let cm = CostMatrix::from_rows(&[[0.0, f64::INFINITY], [1.0, 0.0]]).expect("valid");
        assert!(cm.get(0, 1).is_infinite());
    }

    #[test]
    fn test_set_get() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 42.0);
        assert_eq!(cm.get(0, 1), 42.0);
        assert_eq!(cm.get(1, 0), 0.0);
    }

    #[test]
    fn test_symmetric_pairs() {
        // (0,1) equal both ways, (1,2) equal both ways, (0,2) differs
        assert_eq!(sample().symmetric_pairs(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_fully_symmetric() {
        let cm = CostMatrix::from_rows(&[
            vec![0.0, 5.0, 7.0],
            vec![5.0, 0.0, 9.0],
            vec![7.0, 9.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(cm.symmetric_pairs(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_route_cost() {
        let cm = sample();
        assert!((cm.route_cost(&[0, 1, 2, 0]) - 8.0).abs() < 1e-10);
        assert!((cm.route_cost(&[0, 2, 1, 0]) - 6.0).abs() < 1e-10);
        assert_eq!(cm.route_cost(&[0]), 0.0);
    }

    #[test]
    fn test_serde_rows() {
        #[derive(Deserialize)]
        struct Wrapper {
            cost: CostMatrix,
        }

        let parsed: Wrapper = toml::from_str("cost = [[0.0, 2.0], [3.0, 0.0]]").expect("valid");
        assert_eq!(parsed.cost.get(1, 0), 3.0);

        let ragged: std::result::Result<Wrapper, _> = toml::from_str("cost = [[0.0, 2.0], [3.0]]");
        assert!(ragged.is_err());

        let rows: Vec<Vec<f64>> = parsed.cost.into();
        assert_eq!(rows, vec![vec![0.0, 2.0], vec![3.0, 0.0]]);
    }
}
