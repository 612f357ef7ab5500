//! Stochastic tour construction.
//!
//! One agent ("ant") builds a complete tour by repeatedly choosing the
//! next unvisited node, either uniformly at random (exploration) or by
//! roulette selection over pheromone-weighted desirabilities.

use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::tsp::TspProblem;

/// Desirability weight used in place of `1/d` for a zero-distance edge.
///
/// Strongly prefers coincident nodes without producing ±inf or NaN.
const ZERO_DISTANCE_WEIGHT: f64 = 1e9;

/// One agent's completed tour and its closed-cycle length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntResult {
    /// Visiting order: a permutation of `0..n`.
    pub tour: Vec<usize>,
    /// Closed-cycle length of `tour`.
    pub length: f64,
}

/// Builds one feasible tour against a read-only pheromone snapshot.
///
/// The tour starts at a uniformly random node. At each step, with
/// probability `config.exploration_rate` the next node is drawn uniformly
/// from the unvisited candidates; otherwise candidate `j` is drawn by
/// roulette over `pher(i, j)^alpha * eta(i, j)^beta`, where `eta` is the
/// inverse distance (or a large sentinel for coincident nodes).
///
/// The returned tour is a permutation of `0..problem.len()`.
///
/// # Panics
/// Panics if `problem` is empty.
pub fn construct_tour<R: Rng>(
    problem: &TspProblem,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<usize> {
    let n = problem.len();
    assert!(n > 0, "cannot construct a tour over an empty problem");

    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut candidates = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    let start = rng.random_range(0..n);
    tour.push(start);
    visited[start] = true;

    while tour.len() < n {
        let current = tour[tour.len() - 1];

        candidates.clear();
        candidates.extend((0..n).filter(|&j| !visited[j]));

        let explore = config.exploration_rate > 0.0
            && rng.random_range(0.0..1.0) < config.exploration_rate;

        let next = if explore {
            candidates[rng.random_range(0..candidates.len())]
        } else {
            weights.clear();
            for &j in &candidates {
                let d = problem.distance(current, j);
                let eta = if d > 0.0 { 1.0 / d } else { ZERO_DISTANCE_WEIGHT };
                weights.push(pheromone.get(current, j).powf(config.alpha) * eta.powf(config.beta));
            }
            roulette_choice(&candidates, &weights, rng)
        };

        tour.push(next);
        visited[next] = true;
    }

    tour
}

/// Weighted random choice over `candidates`.
///
/// The cumulative sum is built in candidate order and the draw selects the
/// first candidate whose running total reaches the drawn point. A
/// non-positive total weight (e.g., fully evaporated pheromone) degrades
/// the choice to uniform rather than failing. If floating rounding leaves
/// the drawn point unreached, the last candidate is returned.
///
/// # Panics
/// Panics if `candidates` is empty or the slice lengths differ.
pub fn roulette_choice<R: Rng>(candidates: &[usize], weights: &[f64], rng: &mut R) -> usize {
    assert_eq!(
        candidates.len(),
        weights.len(),
        "candidates and weights must have equal length"
    );
    assert!(!candidates.is_empty(), "cannot choose from an empty candidate set");

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return candidates[rng.random_range(0..candidates.len())];
    }

    let point = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (&candidate, &w) in candidates.iter().zip(weights) {
        cumulative += w;
        if cumulative >= point {
            return candidate;
        }
    }

    candidates[candidates.len() - 1] // floating-point fallback
}
