//! Symmetric Euclidean TSP instances.
//!
//! [`TspProblem`] owns an immutable node set and its precomputed distance
//! matrix; [`load_nodes`] / [`parse_nodes`] read the plain-text node
//! format (`<label> <x> <y>` per line).

mod loader;
mod problem;

pub use loader::{load_nodes, parse_nodes};
pub use problem::{Node, TspProblem};
