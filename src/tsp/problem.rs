//! TSP instance model: nodes and the precomputed distance matrix.

use crate::error::{Error, Result};

/// A city in the plane.
///
/// `index` is the 0-based position assigned at load order; tours refer to
/// nodes by this index. `label` carries the external identifier from the
/// input file and plays no role in the search itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// 0-based internal index.
    pub index: u32,
    /// External identifier.
    pub label: i64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// A symmetric Euclidean TSP instance.
///
/// Owns the node set and the full N×N distance matrix, computed once at
/// construction and never mutated afterwards. The matrix satisfies
/// `d(i, j) == d(j, i)` and `d(i, i) == 0`.
#[derive(Debug, Clone)]
pub struct TspProblem {
    nodes: Vec<Node>,
    /// Flat row-major N×N matrix: `dist[i * n + j]`.
    dist: Vec<f64>,
}

impl TspProblem {
    /// Builds an instance from a node set, filling the distance matrix
    /// in O(N²).
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `nodes` is empty.
    pub fn build(nodes: Vec<Node>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::InvalidInput("problem has no nodes".into()));
        }

        let n = nodes.len();
        let mut dist = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = (nodes[i].x - nodes[j].x).hypot(nodes[i].y - nodes[j].y);
                dist[i * n + j] = d;
                dist[j * n + i] = d;
            }
        }

        Ok(Self { nodes, dist })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the instance has no nodes.
    ///
    /// Always `false` for an instance produced by [`build`](Self::build).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node set, in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `index`.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Distance between nodes `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.nodes.len() + j]
    }

    /// Total length of `tour`.
    ///
    /// Sums the distances of consecutive node pairs. When `close_cycle` is
    /// set, the edge from the last node back to the first is added. Tours
    /// of at most one node have length 0 and no closing edge.
    pub fn tour_length(&self, tour: &[usize], close_cycle: bool) -> f64 {
        let mut total = 0.0;
        for pair in tour.windows(2) {
            total += self.distance(pair[0], pair[1]);
        }
        if close_cycle && tour.len() > 1 {
            total += self.distance(tour[tour.len() - 1], tour[0]);
        }
        total
    }

    /// Maps a tour of internal indices to the external node labels.
    pub fn tour_labels(&self, tour: &[usize]) -> Vec<i64> {
        tour.iter().map(|&i| self.nodes[i].label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: u32, x: f64, y: f64) -> Node {
        Node {
            index,
            label: index as i64 + 1,
            x,
            y,
        }
    }

    /// 3-4-5 right triangle: d(0,1)=3, d(1,2)=4, d(2,0)=5.
    fn triangle() -> TspProblem {
        let nodes = vec![node(0, 0.0, 0.0), node(1, 3.0, 0.0), node(2, 3.0, 4.0)];
        TspProblem::build(nodes).expect("triangle is non-empty")
    }

    #[test]
    fn test_build_empty_rejected() {
        let err = TspProblem::build(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_distance_matrix_symmetric_with_zero_diagonal() {
        let p = triangle();
        for i in 0..p.len() {
            assert_eq!(p.distance(i, i), 0.0);
            for j in 0..p.len() {
                assert_eq!(p.distance(i, j), p.distance(j, i));
            }
        }
    }

    #[test]
    fn test_euclidean_distances() {
        let p = triangle();
        assert!((p.distance(0, 1) - 3.0).abs() < 1e-12);
        assert!((p.distance(1, 2) - 4.0).abs() < 1e-12);
        assert!((p.distance(2, 0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_closed_and_open() {
        let p = triangle();
        let tour = [0, 1, 2];
        assert!((p.tour_length(&tour, true) - 12.0).abs() < 1e-12);
        assert!((p.tour_length(&tour, false) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_degenerate_tours() {
        let p = triangle();
        assert_eq!(p.tour_length(&[], true), 0.0);
        assert_eq!(p.tour_length(&[1], true), 0.0);
        // Two nodes: closing the cycle doubles the single edge.
        assert!((p.tour_length(&[0, 1], true) - 6.0).abs() < 1e-12);
        assert!((p.tour_length(&[0, 1], false) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_labels() {
        let p = triangle();
        assert_eq!(p.tour_labels(&[2, 0, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_single_node_problem() {
        let p = TspProblem::build(vec![node(0, 5.0, 5.0)]).expect("one node suffices");
        assert_eq!(p.len(), 1);
        assert_eq!(p.distance(0, 0), 0.0);
        assert_eq!(p.tour_length(&[0], true), 0.0);
    }
}
