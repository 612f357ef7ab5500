//! ACO iteration loop execution.
//!
//! [`AcoSolver`] owns the problem, the configuration, and the pheromone
//! state, and drives the generation cycle: construct `num_ants` tours
//! against the current pheromone snapshot, evaporate, deposit over the
//! whole generation, update the incumbent.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::ant::{construct_tour, AntResult};
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::{Error, Result};
use crate::random::create_rng;
use crate::tsp::TspProblem;

/// Tour-length statistics over one generation's raw population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// Shortest tour length in the generation.
    pub best: f64,
    /// Mean tour length over the generation.
    pub mean: f64,
    /// Longest tour length in the generation.
    pub worst: f64,
}

impl IterationStats {
    fn from_results(results: &[AntResult]) -> Self {
        let mut best = f64::INFINITY;
        let mut worst = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for r in results {
            best = best.min(r.length);
            worst = worst.max(r.length);
            sum += r.length;
        }
        Self {
            best,
            mean: sum / results.len() as f64,
            worst,
        }
    }
}

/// Result of a full ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found during the entire run.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`.
    pub best_length: f64,

    /// Incumbent best length after each iteration. Non-increasing.
    pub best_history: Vec<f64>,

    /// Per-iteration statistics over the raw (unfiltered) population.
    pub iteration_stats: Vec<IterationStats>,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Executes the ant colony loop over a fixed iteration budget.
///
/// # Usage
///
/// ```
/// use aco_tsp::aco::{AcoConfig, AcoSolver};
/// use aco_tsp::tsp::{Node, TspProblem};
///
/// let nodes = vec![
///     Node { index: 0, label: 1, x: 0.0, y: 0.0 },
///     Node { index: 1, label: 2, x: 1.0, y: 0.0 },
///     Node { index: 2, label: 3, x: 0.0, y: 1.0 },
/// ];
/// let problem = TspProblem::build(nodes)?;
/// let config = AcoConfig::default().with_max_iterations(10).with_seed(42);
///
/// let mut solver = AcoSolver::new(problem, config)?;
/// let result = solver.solve();
/// assert_eq!(result.best_history.len(), 10);
/// # Ok::<(), aco_tsp::Error>(())
/// ```
#[derive(Debug)]
pub struct AcoSolver {
    problem: TspProblem,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    rng: StdRng,
    best_tour: Vec<usize>,
    best_length: f64,
    best_history: Vec<f64>,
}

impl AcoSolver {
    /// Creates a solver over `problem`.
    ///
    /// # Errors
    /// Fails fast with [`Error::InvalidConfig`] when `config` violates a
    /// parameter domain, or [`Error::InvalidInput`] when the problem has
    /// no nodes. No iteration ever runs against an invalid setup.
    pub fn new(problem: TspProblem, config: AcoConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        if problem.is_empty() {
            return Err(Error::InvalidInput("cannot solve an empty problem".into()));
        }

        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let pheromone = PheromoneMatrix::new(problem.len(), config.initial_pheromone);

        Ok(Self {
            problem,
            config,
            pheromone,
            rng,
            best_tour: Vec::new(),
            best_length: f64::INFINITY,
            best_history: Vec::new(),
        })
    }

    /// Runs one generation and returns the raw results plus the
    /// iteration's best.
    ///
    /// All tours are constructed against the pre-update pheromone
    /// snapshot; evaporation and the generation-wide deposit follow only
    /// once every agent has finished. The incumbent is replaced on strict
    /// improvement only, so the earliest-found best survives ties, and its
    /// length is appended to the history.
    pub fn step(&mut self) -> (Vec<AntResult>, AntResult) {
        let results = self.run_generation();

        // First occurrence wins on equal lengths.
        let mut iter_best = &results[0];
        for r in &results[1..] {
            if r.length < iter_best.length {
                iter_best = r;
            }
        }
        let iter_best = iter_best.clone();

        self.pheromone.evaporate(self.config.evaporation_rate);
        self.pheromone.deposit(&results, self.config.deposit_factor);

        if iter_best.length < self.best_length {
            self.best_length = iter_best.length;
            self.best_tour = iter_best.tour.clone();
        }
        self.best_history.push(self.best_length);

        (results, iter_best)
    }

    /// Runs the configured number of iterations and collects the result.
    ///
    /// The loop always runs to `max_iterations`; there is no early
    /// stopping or convergence detection.
    pub fn solve(&mut self) -> AcoResult {
        let start = Instant::now();
        let mut iteration_stats = Vec::with_capacity(self.config.max_iterations);

        for _ in 0..self.config.max_iterations {
            let (results, _) = self.step();
            iteration_stats.push(IterationStats::from_results(&results));
        }

        AcoResult {
            best_tour: self.best_tour.clone(),
            best_length: self.best_length,
            best_history: self.best_history.clone(),
            iteration_stats,
            elapsed: start.elapsed(),
        }
    }

    /// Constructs the generation's tours.
    ///
    /// Each agent runs against a private RNG seeded from the master RNG,
    /// so the parallel fan-out and the sequential path produce identical
    /// results for the same solver seed. The `collect` is the fan-in
    /// barrier: the pheromone update never sees a partial generation.
    fn run_generation(&mut self) -> Vec<AntResult> {
        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| self.rng.random()).collect();

        let construct = |seed: u64| {
            let mut rng = create_rng(seed);
            let tour = construct_tour(&self.problem, &self.pheromone, &self.config, &mut rng);
            let length = self.problem.tour_length(&tour, true);
            AntResult { tour, length }
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return seeds.into_par_iter().map(construct).collect();
        }

        seeds.into_iter().map(construct).collect()
    }

    /// The problem being solved.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// Read-only view of the current pheromone state.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Length of the best tour found so far.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// The best tour found so far. Empty before the first iteration.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Incumbent best length after each completed iteration.
    pub fn best_history(&self) -> &[f64] {
        &self.best_history
    }
}
