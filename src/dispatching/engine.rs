//! Rule composition engine.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::PriorityRule;

/// Strategy for breaking ties when all rules produce equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Shuffle with the supplied RNG before the stable sort, so tied items
    /// come out in a seeded random order.
    #[default]
    Random,

    /// Keep the original order (stable sort).
    PreserveOrder,
}

/// Engine for composing and applying multiple priority rules.
///
/// Rules are applied in order. A later rule is only consulted when every
/// earlier rule ties (within epsilon); the tie-breaker decides the rest.
///
/// # Examples
///
/// ```
/// use u_rota::dispatching::{PriorityRule, RuleEngine, TieBreaker};
///
/// struct ByValue;
/// impl PriorityRule<u32, ()> for ByValue {
///     fn name(&self) -> &str { "ByValue" }
///     fn score(&self, item: &u32, _ctx: &()) -> f64 { f64::from(*item) }
/// }
///
/// let engine = RuleEngine::<u32, ()>::new()
///     .with_rule(ByValue)
///     .with_tie_breaker(TieBreaker::PreserveOrder);
///
/// let mut rng = rand::rng();
/// assert_eq!(engine.sort_indices(&[3u32, 1, 2], &(), &mut rng), vec![1, 2, 0]);
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates a new engine with no rules and random tie-breaking.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Random,
            epsilon: 1e-9,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts items by priority (lowest score first = highest priority).
    ///
    /// Returns indices into the original slice, sorted by priority. The RNG
    /// is only drawn from when the tie-breaker is [`TieBreaker::Random`].
    pub fn sort_indices<R: Rng + ?Sized>(
        &self,
        items: &[T],
        context: &C,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();

        if self.tie_breaker == TieBreaker::Random {
            indices.shuffle(rng);
        }

        if self.rules.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.rules.iter().map(|r| r.score(item, context)).collect())
            .collect();

        // Stable: ties keep the (possibly shuffled) order above.
        indices.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(scores[b].iter()) {
                if (va - vb).abs() > self.epsilon {
                    return va.partial_cmp(vb).unwrap_or(std::cmp::Ordering::Equal);
                }
            }
            std::cmp::Ordering::Equal
        });

        indices
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
