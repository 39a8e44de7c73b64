//! SA execution loop.

use log::{debug, info, trace};
use rand::Rng;

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::rng_from;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Initial cost followed by the best cost after every iteration.
    ///
    /// Non-increasing by construction.
    pub cost_history: Vec<f64>,
}

impl<S: Clone> SaResult<S> {
    /// Relative improvement of the best over the initial cost, in percent.
    pub fn improvement_percent(&self) -> f64 {
        if self.initial_cost == 0.0 {
            0.0
        } else {
            (self.initial_cost - self.best_cost) / self.initial_cost * 100.0
        }
    }
}

/// Metropolis acceptance criterion.
///
/// Improvements (`delta < 0`) are always accepted without consuming a
/// random draw. Otherwise the move is accepted with probability
/// `exp(-delta / temperature)`.
pub fn metropolis_accept<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.random::<f64>() < (-delta / temperature).exp()
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial` until the temperature drops to
    /// `config.final_temperature`.
    ///
    /// Each iteration proposes one neighbor, applies the Metropolis rule at
    /// the current temperature, updates the best solution, records the
    /// best cost, and cools unconditionally.
    ///
    /// # Errors
    /// Returns the validation error for an invalid configuration; such a
    /// configuration would otherwise loop forever or not at all.
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = Vec::with_capacity(config.estimated_iterations() + 1);
        cost_history.push(best_cost);

        info!(
            "sa: initial cost {initial_cost:.2}, temperature {} -> {} at rate {}",
            config.initial_temperature, config.final_temperature, config.cooling_rate
        );

        while temperature > config.final_temperature {
            let neighbor = problem.neighbor(&current, &mut rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            if delta < 0.0 {
                improving_moves += 1;
            }
            if metropolis_accept(delta, temperature, &mut rng) {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
                trace!("sa: accepted delta {delta:.4} at temperature {temperature:.4}");
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
            }
            cost_history.push(best_cost);

            temperature *= config.cooling_rate;
            iterations += 1;

            if config.log_interval > 0 && iterations % config.log_interval == 0 {
                debug!(
                    "sa: iteration {iterations}, temperature {temperature:.4}, \
                     current {current_cost:.2}, best {best_cost:.2}"
                );
            }
        }

        info!(
            "sa: finished after {iterations} iterations, best cost {best_cost:.2} \
             ({accepted_moves} accepted)"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, OptError};
    use crate::random::create_rng;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem;

    impl SaProblem for QuadraticProblem {
        type Solution = f64;

        fn cost(&self, x: &f64) -> f64 {
            x * x
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
            x + rng.random_range(-1.0..1.0)
        }
    }

    /// Every neighbor is strictly better than its source.
    struct AlwaysBetter;

    impl SaProblem for AlwaysBetter {
        type Solution = f64;

        fn cost(&self, x: &f64) -> f64 {
            *x
        }

        fn neighbor<R: Rng>(&self, x: &f64, _rng: &mut R) -> f64 {
            x - 1.0
        }
    }

    #[test]
    fn test_sa_quadratic() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(0.001)
            .with_cooling_rate(0.999)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 8.0, &config).unwrap();

        assert!(result.best_cost < 1.0, "got {}", result.best_cost);
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
        assert!(result.improvement_percent() > 90.0);
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_final_temperature(0.01)
            .with_cooling_rate(0.99)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 5.0, &config).unwrap();

        assert_eq!(result.cost_history.len(), result.iterations + 1);
        assert_eq!(result.cost_history[0], 25.0);
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0], "history increased: {} > {}", w[1], w[0]);
        }
        assert_eq!(result.cost_history.last(), Some(&result.best_cost));
    }

    #[test]
    fn test_tiny_cooling_rate_runs_once() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_final_temperature(1.0)
            .with_cooling_rate(1e-9)
            .with_seed(3);

        let result = SaRunner::run(&QuadraticProblem, 2.0, &config).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.cost_history.len(), 2);
        assert!(result.final_temperature <= 1.0);
    }

    #[test]
    fn test_improvements_always_accepted() {
        let config = SaConfig::default()
            .with_initial_temperature(1e-3)
            .with_final_temperature(1e-9)
            .with_cooling_rate(0.9)
            .with_seed(7);

        let result = SaRunner::run(&AlwaysBetter, 0.0, &config).unwrap();
        assert_eq!(result.accepted_moves, result.iterations);
        assert_eq!(result.improving_moves, result.iterations);
        assert_eq!(result.best_cost, -(result.iterations as f64));
    }

    #[test]
    fn test_metropolis_negative_delta_consumes_no_randomness() {
        let mut rng = create_rng(5);
        let before = rng.clone();
        for _ in 0..100 {
            assert!(metropolis_accept(-1e-9, 1e-300, &mut rng));
        }
        let mut before = before;
        assert_eq!(rng.random::<u64>(), before.random::<u64>());
    }

    #[test]
    fn test_metropolis_zero_delta_always_accepted() {
        let mut rng = create_rng(5);
        // exp(0) = 1 > any draw in [0, 1).
        assert!((0..100).all(|_| metropolis_accept(0.0, 1.0, &mut rng)));
    }

    #[test]
    fn test_metropolis_rejects_huge_uphill_when_cold() {
        let mut rng = create_rng(5);
        assert!((0..100).all(|_| !metropolis_accept(1e6, 1e-3, &mut rng)));
    }

    #[test]
    fn test_metropolis_accepts_uphill_when_hot() {
        let mut rng = create_rng(42);
        let accepted = (0..10_000)
            .filter(|_| metropolis_accept(1.0, 1e8, &mut rng))
            .count();
        assert!(accepted > 9_900, "accepted {accepted}");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_final_temperature(2.0);
        assert!(matches!(
            SaRunner::run(&QuadraticProblem, 1.0, &config),
            Err(OptError::Config(ConfigError::TemperatureOrder { .. }))
        ));
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_final_temperature(0.1)
            .with_cooling_rate(0.95)
            .with_seed(21);
        let a = SaRunner::run(&QuadraticProblem, 3.0, &config).unwrap();
        let b = SaRunner::run(&QuadraticProblem, 3.0, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }
}
