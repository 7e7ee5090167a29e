use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for population generation
/// and breeding.
///
/// # Note
/// `mutation_rate` is a per-parameter probability and
/// should be in the range [0.0, 1.0]; values above 1 are
/// treated as 1 and non-positive values disable mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Size of the first population.
    pub initial_count: NonZeroUsize,
    /// Number of children bred each epoch.
    pub offspring_count: NonZeroUsize,
    /// Number of partitions the population is
    /// stepped in concurrently, and of worker threads.
    pub thread_count: NonZeroUsize,
    /// Chance that a child's weight or bias is redrawn.
    pub mutation_rate: f64,
    /// Whether both parents are carried over
    /// into the next generation.
    pub keep_parents: bool,
}

impl EvolutionConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, `false`, or in the case of
    /// `NonZeroUsize`s, 1.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation, or to fill in unused values.
    ///
    /// # Examples
    /// ```
    /// use neuroevo::EvolutionConfig;
    ///
    /// let cfg = EvolutionConfig {
    ///     // Specify some values here...
    ///     mutation_rate: 0.05,
    ///     // Default the rest...
    ///     ..EvolutionConfig::zero()
    /// };
    /// assert_eq!(cfg.thread_count.get(), 1);
    /// ```
    pub const fn zero() -> EvolutionConfig {
        EvolutionConfig {
            initial_count: NonZeroUsize::MIN,
            offspring_count: NonZeroUsize::MIN,
            thread_count: NonZeroUsize::MIN,
            mutation_rate: 0.0,
            keep_parents: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_round_trip() {
        let config = EvolutionConfig {
            initial_count: NonZeroUsize::new(30).unwrap(),
            offspring_count: NonZeroUsize::new(28).unwrap(),
            thread_count: NonZeroUsize::new(4).unwrap(),
            mutation_rate: 0.1,
            keep_parents: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<EvolutionConfig>(&json).unwrap(), config);
    }

    #[test]
    fn zero_thread_count_is_rejected() {
        let json = r#"{"initial_count":1,"offspring_count":1,"thread_count":0,
            "mutation_rate":0.0,"keep_parents":false}"#;
        assert!(serde_json::from_str::<EvolutionConfig>(json).is_err());
    }
}
