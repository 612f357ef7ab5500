//! ACO configuration.

/// Configuration for the ant colony solver.
///
/// Controls colony size, the iteration budget, the pheromone/heuristic
/// exponents, and the update rates.
///
/// # Defaults
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.max_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(30)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of agents ("ants") constructing tours per iteration.
    ///
    /// Must be at least 1. Typical range: 10–50.
    pub num_ants: usize,

    /// Number of iterations to run. The solver always runs this many;
    /// there is no early stopping.
    pub max_iterations: usize,

    /// Pheromone exponent. Higher values weight the colony's accumulated
    /// preference more strongly. Must be finite and non-negative.
    pub alpha: f64,

    /// Heuristic (inverse-distance) exponent. Higher values make the
    /// construction greedier toward short edges. Must be finite and
    /// non-negative.
    pub beta: f64,

    /// Fraction of pheromone lost per iteration, in `[0, 1]`.
    pub evaporation_rate: f64,

    /// Probability of a pure exploration step, in `[0, 1]`.
    ///
    /// With this probability an agent picks its next node uniformly at
    /// random among the unvisited candidates, ignoring pheromone and
    /// heuristic weights entirely.
    pub exploration_rate: f64,

    /// Initial pheromone level on every edge. Must be finite and positive.
    pub initial_pheromone: f64,

    /// Scale of the pheromone deposit: each tour contributes
    /// `deposit_factor / length` to its edges. Must be finite and positive.
    pub deposit_factor: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to construct the generation's tours in parallel using
    /// rayon. Only effective with the `parallel` cargo feature; results
    /// are identical to the sequential path for the same seed.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.3,
            exploration_rate: 0.01,
            initial_pheromone: 1.0,
            deposit_factor: 1.0,
            seed: None,
            parallel: true,
        }
    }
}

impl AcoConfig {
    /// Sets the number of agents per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the exploration probability.
    pub fn with_exploration_rate(mut self, p: f64) -> Self {
        self.exploration_rate = p;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau: f64) -> Self {
        self.initial_pheromone = tau;
        self
    }

    /// Sets the deposit scale.
    pub fn with_deposit_factor(mut self, q: f64) -> Self {
        self.deposit_factor = q;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-domain values are rejected, never clamped: the solver refuses
    /// to start rather than silently running with altered parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err("alpha must be finite and non-negative".into());
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err("beta must be finite and non-negative".into());
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err("evaporation_rate must lie in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err("exploration_rate must lie in [0, 1]".into());
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err("initial_pheromone must be finite and positive".into());
        }
        if !(self.deposit_factor.is_finite() && self.deposit_factor > 0.0) {
            return Err("deposit_factor must be finite and positive".into());
        }
        Ok(())
    }
}
