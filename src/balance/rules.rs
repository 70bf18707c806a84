//! Candidate ordering rules.

use crate::dispatching::{PriorityRule, RuleEngine, TieBreaker};

use super::tracker::AssignmentTracker;

/// A participant under consideration for one slot.
///
/// `rank` is the participant's rank for the slot, `None` when they did not
/// rank it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub participant: usize,
    pub rank: Option<u32>,
}

/// Best (lowest) rank first; unranked candidates last.
pub struct PreferenceRank;

impl PriorityRule<Candidate, AssignmentTracker> for PreferenceRank {
    fn name(&self) -> &str {
        "PreferenceRank"
    }

    fn score(&self, candidate: &Candidate, _ctx: &AssignmentTracker) -> f64 {
        f64::from(candidate.rank.unwrap_or(u32::MAX))
    }
}

/// Fewest slots held so far first.
pub struct AssignmentLoad;

impl PriorityRule<Candidate, AssignmentTracker> for AssignmentLoad {
    fn name(&self) -> &str {
        "AssignmentLoad"
    }

    fn score(&self, candidate: &Candidate, ctx: &AssignmentTracker) -> f64 {
        ctx.load(candidate.participant) as f64
    }
}

/// Ordering shared by both passes: best rank, then lowest running load,
/// remaining ties settled by `tie_breaker`.
///
/// Gap-fill candidates are all unranked, so for them only load and the
/// tie-breaker matter.
pub fn candidate_engine(tie_breaker: TieBreaker) -> RuleEngine<Candidate, AssignmentTracker> {
    RuleEngine::new()
        .with_rule(PreferenceRank)
        .with_rule(AssignmentLoad)
        .with_tie_breaker(tie_breaker)
}
