//! Balancing output.

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{ParticipantId, SlotId};

/// A participant placed on a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignedStaff {
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
    /// The participant's rank for this slot, or `None` when the seat was
    /// filled for coverage without the participant having ranked it.
    pub preference_rank: Option<u32>,
}

/// The staff placed on one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotAssignment {
    pub slot_id: SlotId,
    pub slot_name: String,
    pub slot_date: NaiveDate,
    pub required_count: u32,
    pub assigned: Vec<AssignedStaff>,
    /// `max(0, required_count - assigned.len())`.
    pub unassigned_count: u32,
}

impl SlotAssignment {
    /// Seats still open on this slot.
    pub fn shortfall(&self) -> u32 {
        self.unassigned_count
    }

    pub fn is_filled(&self) -> bool {
        self.unassigned_count == 0
    }

    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.assigned
            .iter()
            .any(|a| &a.participant_id == participant)
    }
}

/// The weighted sub-scores behind [`BalancingResult::fairness_score`].
///
/// Each sub-score is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBreakdown {
    /// Filled seats over required seats.
    pub coverage: f64,
    /// Share of assignments that went to someone who ranked the slot.
    pub preference_satisfaction: f64,
    /// `1 - stddev/mean` of the loads of participants holding at least one
    /// seat, clamped to `[0, 1]`. Zero-load participants are left out.
    pub workload_balance: f64,
}

impl ScoreBreakdown {
    pub const ZERO: Self = Self {
        coverage: 0.0,
        preference_satisfaction: 0.0,
        workload_balance: 0.0,
    };
}

/// Result of one balancing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancingResult {
    /// One entry per slot, in chronological processing order.
    pub assignments: Vec<SlotAssignment>,
    /// Overall quality, 0 to 100.
    pub fairness_score: u32,
    /// One line per slot left under capacity.
    pub unmet_requirements: Vec<String>,
    pub breakdown: ScoreBreakdown,
    /// Seed of the tie-break RNG. Passing it back in reproduces this result.
    pub seed: u64,
}

impl BalancingResult {
    pub fn slot(&self, id: &SlotId) -> Option<&SlotAssignment> {
        self.assignments.iter().find(|a| &a.slot_id == id)
    }

    /// Total number of seats filled.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(|a| a.assigned.len()).sum()
    }

    /// Total number of open seats across all slots.
    pub fn total_shortfall(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| u64::from(a.unassigned_count))
            .sum()
    }
}
