//! Ant Colony Optimization (ACO) for the symmetric TSP.
//!
//! A population-based construction metaheuristic: every iteration, a
//! colony of agents builds tours by probabilistic, pheromone-guided
//! decisions, then the shared pheromone model is evaporated and reinforced
//! from the complete generation. Edges that appear in short tours
//! accumulate preference over time.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: algorithm parameters (colony size, exponents, rates)
//! - [`AcoSolver`]: executes the iteration loop
//! - [`AcoResult`]: final result with convergence history and statistics
//! - [`PheromoneMatrix`]: shared edge-preference state
//!
//! The construction primitives [`construct_tour`] and [`roulette_choice`]
//! are exposed directly for testing and for building custom loops.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod pheromone;
mod solver;

pub use ant::{construct_tour, roulette_choice, AntResult};
pub use config::AcoConfig;
pub use pheromone::{PheromoneMatrix, MIN_TOUR_LENGTH};
pub use solver::{AcoResult, AcoSolver, IterationStats};
