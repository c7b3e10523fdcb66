//! PSO configuration.

/// Configuration for particle swarm optimization.
///
/// # Defaults
///
/// ```
/// use cpu_sched::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.particles, 40);
/// assert_eq!(config.iterations, 80);
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub particles: usize,

    /// Fixed number of swarm iterations.
    pub iterations: usize,

    /// Inertia weight `w`: how much previous velocity persists.
    pub inertia: f64,

    /// Cognitive weight `c1`: pull toward each particle's personal best.
    pub cognitive: f64,

    /// Social weight `c2`: pull toward the swarm's global best.
    pub social: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particles: 40,
            iterations: 80,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive weight.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social weight.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.particles == 0 {
            return Err("particles must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.inertia < 0.0 {
            return Err("inertia must be non-negative".into());
        }
        if self.cognitive < 0.0 || self.social < 0.0 {
            return Err("cognitive and social weights must be non-negative".into());
        }
        Ok(())
    }
}
