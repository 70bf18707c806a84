//! Balancer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;

/// Weights of the three sub-scores behind the fairness score.
///
/// Weights must be non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    pub coverage: f64,
    pub preference: f64,
    pub workload: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            coverage: 0.4,
            preference: 0.4,
            workload: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn new(coverage: f64, preference: f64, workload: f64) -> Self {
        Self {
            coverage,
            preference,
            workload,
        }
    }

    /// Validates the weights.
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("coverage", self.coverage),
            ("preference", self.preference),
            ("workload", self.workload),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} weight must be a non-negative number, got {w}"));
            }
        }
        let sum = self.coverage + self.preference + self.workload;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("score weights must sum to 1, got {sum}"));
        }
        Ok(())
    }
}

/// Configuration for a balancing run.
///
/// # Examples
///
/// ```
/// use u_rota::balance::BalanceConfig;
///
/// let config = BalanceConfig::default()
///     .with_seed(7)
///     .with_max_assignments_per_participant(2);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceConfig {
    /// Seed for the tie-break RNG (None for a fresh random seed).
    pub seed: Option<u64>,

    /// How candidates that tie on rank and load are ordered.
    pub tie_breaker: TieBreaker,

    /// Most slots one participant can be placed on. `None` = no cap.
    pub max_assignments_per_participant: Option<usize>,

    /// Sub-score weights for the fairness score.
    pub weights: ScoreWeights,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tie_breaker: TieBreaker::Random,
            max_assignments_per_participant: Some(1),
            weights: ScoreWeights::default(),
        }
    }
}

impl BalanceConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Caps how many slots a single participant can be placed on.
    pub fn with_max_assignments_per_participant(mut self, n: usize) -> Self {
        self.max_assignments_per_participant = Some(n);
        self
    }

    /// Lets participants take any number of slots; only load balancing
    /// spreads the work.
    pub fn with_unlimited_assignments(mut self) -> Self {
        self.max_assignments_per_participant = None;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_assignments_per_participant == Some(0) {
            return Err("max_assignments_per_participant must be at least 1".into());
        }
        self.weights.validate()
    }
}
