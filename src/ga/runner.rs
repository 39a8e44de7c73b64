//! GA evolutionary loop execution.
//!
//! [`Evolution`] holds the population and advances it one generation at a
//! time: rank → select → breed → mutate → replace. [`GaRunner`] drives an
//! `Evolution` for the configured number of generations.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::GaConfig;
use super::selection::{rank_population, select};
use super::types::{GaProblem, Individual};
use crate::error::Result;
use crate::random::{rng_from, shuffle};

/// Lifecycle of an [`Evolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GaPhase {
    /// Random population built; no generation evolved yet.
    Initialized,
    /// At least one generation evolved, more to go.
    Evolving,
    /// The configured generation count has been reached.
    Converged,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Top-ranked individual of the final population.
    pub best: I,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations evolved.
    pub generations: usize,

    /// Best cost of the initial population followed by the best cost after
    /// each generation.
    pub cost_history: Vec<f64>,
}

/// A population evolving under a [`GaProblem`].
pub struct Evolution<'a, P: GaProblem> {
    problem: &'a P,
    config: GaConfig,
    population: Vec<P::Individual>,
    rng: StdRng,
    generation: usize,
}

impl<'a, P: GaProblem> Evolution<'a, P> {
    /// Validates `config` and builds a random initial population.
    pub fn new(problem: &'a P, config: &GaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let population = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        Ok(Self {
            problem,
            config: config.clone(),
            population,
            rng,
            generation: 0,
        })
    }

    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn phase(&self) -> GaPhase {
        if self.generation >= self.config.generations {
            GaPhase::Converged
        } else if self.generation == 0 {
            GaPhase::Initialized
        } else {
            GaPhase::Evolving
        }
    }

    /// The top-ranked individual of the current population.
    pub fn best(&self) -> Result<&P::Individual> {
        let ranked = rank_population(&self.population)?;
        Ok(&self.population[ranked[0].0])
    }

    /// Replaces the population with the next generation.
    pub fn evolve_generation(&mut self) -> Result<()> {
        let elite_size = self.config.elite_size;
        let population_size = self.config.population_size;

        let ranked = rank_population(&self.population)?;
        let selected = select(&ranked, elite_size, population_size, &mut self.rng);
        let pool: Vec<P::Individual> = selected
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();

        let children = breed(
            self.problem,
            &pool,
            elite_size,
            population_size,
            &mut self.rng,
        );
        self.population = mutate_population(
            self.problem,
            children,
            elite_size,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.generation += 1;
        trace!("ga: generation {} bred", self.generation);
        Ok(())
    }
}

/// Builds the next generation from a mating pool.
///
/// The first `elite_size` pool entries pass through unchanged. The pool is
/// then shuffled and entry `i` is crossed with entry `pool.len() - i - 1`
/// until `population_size - elite_size` children exist.
pub fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    pool: &[P::Individual],
    elite_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut children: Vec<P::Individual> = Vec::with_capacity(population_size);
    children.extend(pool.iter().take(elite_size).cloned());

    let mut mating: Vec<&P::Individual> = pool.iter().collect();
    shuffle(&mut mating, rng);

    let n = mating.len();
    let offspring = population_size.saturating_sub(elite_size).min(n);
    for i in 0..offspring {
        children.push(problem.crossover(mating[i], mating[n - i - 1], rng));
    }
    children
}

/// Mutates every child except the first `elite_size`.
pub fn mutate_population<P: GaProblem, R: Rng>(
    problem: &P,
    children: Vec<P::Individual>,
    elite_size: usize,
    rate: f64,
    rng: &mut R,
) -> Vec<P::Individual> {
    children
        .into_iter()
        .enumerate()
        .map(|(i, child)| {
            if i < elite_size {
                child
            } else {
                problem.mutate(&child, rate, rng)
            }
        })
        .collect()
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = TspProblem::new(cities)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best cost: {:.2}", result.best_cost);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs exactly `config.generations` generations and reports the
    /// top-ranked individual of the final population.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut evolution = Evolution::new(problem, config)?;

        let initial_cost = evolution.best()?.cost();
        info!(
            "ga: population {}, elite {}, {} generations, initial best cost {initial_cost:.2}",
            config.population_size, config.elite_size, config.generations
        );

        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(initial_cost);

        while evolution.phase() != GaPhase::Converged {
            evolution.evolve_generation()?;
            let generation = evolution.generation();
            let best_cost = evolution.best()?.cost();
            cost_history.push(best_cost);
            problem.on_generation(generation, best_cost);

            if config.log_interval > 0 && generation % config.log_interval == 0 {
                debug!("ga: generation {generation:4} | best cost {best_cost:.2}");
            }
        }

        let best = evolution.best()?.clone();
        let best_cost = best.cost();
        info!(
            "ga: finished after {} generations, best cost {best_cost:.2}",
            evolution.generation()
        );

        Ok(GaResult {
            best,
            best_cost,
            generations: evolution.generation(),
            cost_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
