//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! The crate couples a stochastic tour-construction heuristic to a shared,
//! reinforcement-style pheromone model:
//!
//! - **[`tsp`]**: the problem model — immutable node set, precomputed
//!   symmetric Euclidean distance matrix, and the plain-text node loader.
//! - **[`aco`]**: the engine — per-agent tour construction, the pheromone
//!   update rule, and the iteration loop.
//!
//! # Example
//!
//! ```
//! use aco_tsp::aco::{AcoConfig, AcoSolver};
//! use aco_tsp::tsp::{Node, TspProblem};
//!
//! let nodes = vec![
//!     Node { index: 0, label: 1, x: 0.0, y: 0.0 },
//!     Node { index: 1, label: 2, x: 1.0, y: 0.0 },
//!     Node { index: 2, label: 3, x: 1.0, y: 1.0 },
//!     Node { index: 3, label: 4, x: 0.0, y: 1.0 },
//! ];
//! let problem = TspProblem::build(nodes)?;
//!
//! let config = AcoConfig::default()
//!     .with_num_ants(10)
//!     .with_max_iterations(20)
//!     .with_seed(42);
//!
//! let mut solver = AcoSolver::new(problem, config)?;
//! let result = solver.solve();
//!
//! assert_eq!(result.best_history.len(), 20);
//! assert!(result.best_length >= 4.0); // the perimeter is optimal
//! # Ok::<(), aco_tsp::Error>(())
//! ```
//!
//! Randomness is injected explicitly: a seeded configuration reproduces an
//! entire run, including under the optional rayon-based parallel
//! construction (`parallel` feature).

pub mod aco;
mod error;
pub mod random;
pub mod tsp;

pub use error::{Error, Result};
