//! Immutable tour value type.
//!
//! A [`Tour`] couples an ordered list of stop indices with its total cost.
//! The cost is computed once, at construction, from a [`CostFn`]; the stop
//! order is never exposed mutably, so the cached cost can never go stale.
//! Producing a different order means building a new `Tour`.

use crate::cost::CostFn;
use crate::error::{OptError, Result};

/// An ordered sequence of stops with its precomputed cost.
#[derive(Debug, Clone, PartialEq)]
///
/// With the `serde` feature a tour can be serialized but not deserialized:
/// rebuild it from its stops with [`Tour::cycle`], [`Tour::path`] or
/// [`Tour::checked_cycle`] so the cost matches.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    stops: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a closed tour: the edge from the last stop back to the first
    /// is included in the cost.
    pub fn cycle<C: CostFn + ?Sized>(stops: Vec<usize>, costs: &C) -> Self {
        let open: f64 = stops.windows(2).map(|w| costs.cost(w[0], w[1])).sum();
        let closing = match (stops.last(), stops.first()) {
            (Some(&last), Some(&first)) => costs.cost(last, first),
            _ => 0.0,
        };
        Self {
            stops,
            cost: open + closing,
        }
    }

    /// Builds an open path: only consecutive edges are summed.
    ///
    /// Depot routes spell out their return leg explicitly
    /// (`[depot, .., depot]`), so no closing edge is added.
    pub fn path<C: CostFn + ?Sized>(stops: Vec<usize>, costs: &C) -> Self {
        let cost = stops.windows(2).map(|w| costs.cost(w[0], w[1])).sum();
        Self { stops, cost }
    }

    /// Builds a closed tour after checking `stops` is a permutation of
    /// `0..costs.len()`.
    pub fn checked_cycle<C: CostFn + ?Sized>(stops: Vec<usize>, costs: &C) -> Result<Self> {
        validate_permutation(&stops, costs.len())?;
        Ok(Self::cycle(stops, costs))
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total cost, computed at construction.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Reciprocal of the cost.
    ///
    /// # Errors
    ///
    /// [`OptError::ZeroCostTour`] when the cost is exactly zero, e.g. a
    /// single-location tour or one whose locations all coincide.
    pub fn fitness(&self) -> Result<f64> {
        if self.cost == 0.0 {
            return Err(OptError::ZeroCostTour {
                stops: self.stops.clone(),
            });
        }
        Ok(1.0 / self.cost)
    }
}

/// Checks that `stops` contains every index in `0..n` exactly once.
pub fn validate_permutation(stops: &[usize], n: usize) -> Result<()> {
    let invalid = || OptError::InvalidPermutation {
        stops: stops.to_vec(),
        len: n,
    };
    if stops.len() != n {
        return Err(invalid());
    }
    let mut seen = vec![false; n];
    for &s in stops {
        if s >= n || seen[s] {
            return Err(invalid());
        }
        seen[s] = true;
    }
    Ok(())
}
