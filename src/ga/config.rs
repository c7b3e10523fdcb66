//! GA configuration.

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use cpu_sched::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use cpu_sched::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of candidate orders in the population.
    ///
    /// Two slots are taken by the arrival-sorted and burst-sorted seeds;
    /// the rest start as random permutations.
    pub population_size: usize,

    /// Fixed number of generations to run (no convergence cut-off).
    pub generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0-1.0).
    pub mutation_rate: f64,

    /// Tournament size for parent selection.
    ///
    /// Higher values increase selection pressure.
    pub tournament_size: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.tournament_size, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_generations(200)
            .with_mutation_rate(0.25)
            .with_tournament_size(5)
            .with_seed(7);
        assert_eq!(config.population_size, 80);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.25).abs() < 1e-12);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        assert!((GaConfig::default().with_mutation_rate(1.5).mutation_rate - 1.0).abs() < 1e-12);
        assert!((GaConfig::default().with_mutation_rate(-0.5).mutation_rate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_generations(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }
}
