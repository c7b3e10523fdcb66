//! ACO configuration.

/// Configuration for ant colony optimization.
///
/// # Defaults
///
/// ```
/// use cpu_sched::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ants, 30);
/// assert_eq!(config.iterations, 100);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration.
    pub ants: usize,

    /// Fixed number of colony iterations.
    pub iterations: usize,

    /// Pheromone importance exponent (alpha).
    pub alpha: f64,

    /// Heuristic importance exponent (beta).
    pub beta: f64,

    /// Pheromone evaporation rate (rho) in [0, 1]: each iteration the
    /// matrix is scaled by `1 - rho` before deposits.
    pub evaporation: f64,

    /// Pheromone deposit factor (Q): each ant deposits `Q / fitness`
    /// along its tour.
    pub deposit: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 30,
            iterations: 100,
            alpha: 1.0,
            beta: 3.0,
            evaporation: 0.1,
            deposit: 100.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the colony size.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pheromone importance exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic importance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate, clamped to [0, 1].
    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho.clamp(0.0, 1.0);
        self
    }

    /// Sets the deposit factor.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ants == 0 {
            return Err("ants must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.alpha < 0.0 || self.beta < 0.0 {
            return Err("alpha and beta must be non-negative".into());
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if self.deposit <= 0.0 {
            return Err("deposit must be positive".into());
        }
        Ok(())
    }
}
