//! Pheromone state and the per-iteration update rule.

use super::ant::AntResult;

/// Lower clamp applied to tour lengths in [`PheromoneMatrix::deposit`].
///
/// A tour over all-coincident nodes has length 0 and would make the
/// deposit term diverge; clamping keeps the update finite for that
/// pathological input.
pub const MIN_TOUR_LENGTH: f64 = 1e-12;

/// Shared pheromone state over the edges of a TSP instance.
///
/// Flat row-major N×N storage, symmetric by construction: every write goes
/// through [`add`](Self::add), which updates both `(i, j)` and `(j, i)`.
/// The diagonal participates in evaporation but is never read, since a
/// tour never revisits its current node.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    tau: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an N×N matrix with every cell set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            tau: vec![initial; n * n],
        }
    }

    /// Matrix dimension (number of nodes).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has zero dimension.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone level on edge `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.tau[i * self.n + j]
    }

    /// Adds `delta` to edge `(i, j)` in both directions.
    #[inline]
    pub fn add(&mut self, i: usize, j: usize, delta: f64) {
        self.tau[i * self.n + j] += delta;
        self.tau[j * self.n + i] += delta;
    }

    /// Multiplicative decay: scales every cell by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for cell in &mut self.tau {
            *cell *= keep;
        }
    }

    /// Reinforces every edge used by the generation's tours.
    ///
    /// Each tour contributes `factor / length` to all of its consecutive
    /// edges plus the closing edge, in both directions. Contributions are
    /// purely additive: agents that produced identical tours reinforce the
    /// same edges once each. Lengths are clamped below by
    /// [`MIN_TOUR_LENGTH`]. Tours of fewer than two nodes have no edges
    /// and deposit nothing.
    pub fn deposit(&mut self, results: &[AntResult], factor: f64) {
        for result in results {
            let tour = &result.tour;
            if tour.len() < 2 {
                continue;
            }

            let delta = factor / result.length.max(MIN_TOUR_LENGTH);
            for pair in tour.windows(2) {
                self.add(pair[0], pair[1], delta);
            }
            self.add(tour[tour.len() - 1], tour[0], delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(tour: Vec<usize>, length: f64) -> AntResult {
        AntResult { tour, length }
    }

    #[test]
    fn test_initialized_to_constant() {
        let pher = PheromoneMatrix::new(3, 0.5);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(pher.get(i, j), 0.5);
            }
        }
    }

    #[test]
    fn test_evaporate_scales_every_cell() {
        let mut pher = PheromoneMatrix::new(3, 1.0);
        pher.evaporate(0.3);
        for i in 0..3 {
            for j in 0..3 {
                assert!((pher.get(i, j) - 0.7).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_evaporate_full_rate_zeroes_matrix() {
        let mut pher = PheromoneMatrix::new(4, 2.0);
        pher.evaporate(1.0);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(pher.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_add_is_symmetric() {
        let mut pher = PheromoneMatrix::new(3, 0.0);
        pher.add(0, 2, 1.5);
        assert_eq!(pher.get(0, 2), 1.5);
        assert_eq!(pher.get(2, 0), 1.5);
        assert_eq!(pher.get(0, 1), 0.0);
    }

    #[test]
    fn test_deposit_reinforces_closing_edge() {
        let mut pher = PheromoneMatrix::new(3, 0.0);
        // Tour 0-1-2 of length 4: delta = 1/4 on edges (0,1), (1,2), (2,0).
        pher.deposit(&[result(vec![0, 1, 2], 4.0)], 1.0);
        assert!((pher.get(0, 1) - 0.25).abs() < 1e-12);
        assert!((pher.get(1, 2) - 0.25).abs() < 1e-12);
        assert!((pher.get(2, 0) - 0.25).abs() < 1e-12);
        assert!((pher.get(0, 2) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_scales_with_factor_and_length() {
        let mut pher = PheromoneMatrix::new(3, 0.0);
        pher.deposit(&[result(vec![0, 1, 2], 10.0)], 100.0);
        assert!((pher.get(0, 1) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_tours_deposit_additively() {
        let mut pher = PheromoneMatrix::new(3, 0.0);
        let twin = result(vec![0, 1, 2], 4.0);
        pher.deposit(&[twin.clone(), twin], 1.0);
        // Two identical tours each add 0.25; the total is uncapped.
        assert!((pher.get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_skips_edgeless_tours() {
        let mut pher = PheromoneMatrix::new(2, 0.0);
        pher.deposit(&[result(vec![0], 0.0), result(vec![], 0.0)], 1.0);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(pher.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_zero_length_tour_stays_finite() {
        let mut pher = PheromoneMatrix::new(2, 0.0);
        pher.deposit(&[result(vec![0, 1], 0.0)], 1.0);
        assert!(pher.get(0, 1).is_finite());
        assert!(pher.get(0, 1) > 0.0);
    }

    #[test]
    fn test_update_cycle_keeps_symmetry_and_non_negativity() {
        let mut pher = PheromoneMatrix::new(4, 1.0);
        let results = [
            result(vec![0, 1, 2, 3], 4.0),
            result(vec![2, 0, 3, 1], 6.0),
        ];
        for _ in 0..50 {
            pher.evaporate(0.3);
            pher.deposit(&results, 1.0);
        }
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(pher.get(i, j), pher.get(j, i));
                assert!(pher.get(i, j) >= 0.0);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_symmetry_survives_arbitrary_updates(
            rho in 0.0f64..=1.0,
            factor in 0.1f64..100.0,
            lengths in proptest::collection::vec(0.5f64..50.0, 1..8),
            rounds in 1usize..20,
        ) {
            let mut pher = PheromoneMatrix::new(5, 1.0);
            let results: Vec<AntResult> = lengths
                .iter()
                .enumerate()
                .map(|(k, &len)| {
                    let mut tour: Vec<usize> = (0..5).collect();
                    tour.rotate_left(k % 5);
                    result(tour, len)
                })
                .collect();

            for _ in 0..rounds {
                pher.evaporate(rho);
                pher.deposit(&results, factor);
            }

            for i in 0..5 {
                for j in 0..5 {
                    prop_assert_eq!(pher.get(i, j), pher.get(j, i));
                    prop_assert!(pher.get(i, j) >= 0.0);
                }
            }
        }
    }
}
