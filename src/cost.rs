//! Cost sources for routing problems.
//!
//! Optimizers only ever ask "how much does it cost to travel from stop
//! `a` to stop `b`?". The [`CostFn`] trait answers that question, either
//! from planar coordinates ([`Locations`]) or from an explicit table
//! ([`CostMatrix`]).

use crate::error::{OptError, Result};

/// Pairwise travel cost between stops identified by index.
pub trait CostFn {
    /// Number of stops.
    fn len(&self) -> usize;

    /// Returns `true` if there are no stops.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// Callers guarantee both indices are `< len()`.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A validated, non-empty set of locations with Euclidean costs.
#[derive(Debug, Clone)]
pub struct Locations {
    points: Vec<Location>,
}

impl Locations {
    /// Validates and wraps `points`.
    ///
    /// Fails on an empty list or non-finite coordinates.
    pub fn new(points: Vec<Location>) -> Result<Self> {
        if points.is_empty() {
            return Err(OptError::EmptyInstance);
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(OptError::NonFiniteLocation { index });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Location] {
        &self.points
    }
}

impl CostFn for Locations {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.points[from].distance(&self.points[to])
    }
}

/// A square table of non-negative travel costs.
///
/// Costs need not be symmetric.
///
/// With the `serde` feature, the matrix is stored as nested rows and goes
/// through [`CostMatrix::from_rows`] when deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, checking squareness and entry validity.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(OptError::EmptyInstance);
        }
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(OptError::NonSquareMatrix {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(OptError::InvalidCost {
                        from: row,
                        to: col,
                        value,
                    });
                }
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// Tabulates Euclidean distances between `locations`.
    pub fn euclidean(locations: &Locations) -> Self {
        let n = locations.len();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(locations.cost(i, j));
            }
        }
        Self { n, data }
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = OptError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        CostMatrix::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.data.chunks(matrix.n).map(<[f64]>::to_vec).collect()
    }
}

impl CostFn for CostMatrix {
    fn len(&self) -> usize {
        self.n
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }
}
