//! Ranking and selection for the GA.
//!
//! Selection combines elitism with fitness-proportionate ("roulette")
//! sampling. The roulette wheel spans the *whole* ranked population,
//! elites included, so an elite may be picked again on top of its
//! guaranteed slot.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use rand::Rng;

use super::types::Individual;
use crate::error::Result;

/// Ranks a population by fitness, best first.
///
/// Returns `(index, fitness)` pairs. The sort is stable, so equally fit
/// individuals keep their population order.
///
/// # Errors
/// Propagates the first fitness failure (e.g. a zero-cost tour).
pub fn rank_population<I: Individual>(population: &[I]) -> Result<Vec<(usize, f64)>> {
    let mut ranked = population
        .iter()
        .enumerate()
        .map(|(i, ind)| ind.fitness().map(|f| (i, f)))
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(ranked)
}

/// Cumulative fitness percentages over a ranked list.
///
/// The last entry is 100 (up to rounding).
pub fn cumulative_percentages(ranked: &[(usize, f64)]) -> Vec<f64> {
    let total: f64 = ranked.iter().map(|&(_, f)| f).sum();
    let mut running = 0.0;
    ranked
        .iter()
        .map(|&(_, f)| {
            running += f;
            100.0 * running / total
        })
        .collect()
}

/// Position of the first cumulative percentage that meets or exceeds `draw`.
///
/// Falls back to the last position when rounding leaves the final
/// percentage just under `draw`.
pub fn roulette_pick(cumulative: &[f64], draw: f64) -> usize {
    cumulative
        .iter()
        .position(|&p| draw <= p)
        .unwrap_or(cumulative.len().saturating_sub(1))
}

/// Chooses `population_size` population indices for the mating pool.
///
/// The first `elite_size` entries are the top-ranked indices, in rank
/// order. The rest are roulette draws with a uniform percentage in
/// `[0, 100)`.
pub fn select<R: Rng + ?Sized>(
    ranked: &[(usize, f64)],
    elite_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut selected = Vec::with_capacity(population_size);
    selected.extend(ranked.iter().take(elite_size).map(|&(i, _)| i));
    if ranked.is_empty() {
        return selected;
    }

    let cumulative = cumulative_percentages(ranked);
    for _ in elite_size..population_size {
        let draw = 100.0 * rng.random::<f64>();
        selected.push(ranked[roulette_pick(&cumulative, draw)].0);
    }
    selected
}
