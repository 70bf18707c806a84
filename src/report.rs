//! Read-only views of a [`BalancingResult`].
//!
//! The per-staff and per-slot exports are both projections of the same
//! result. Satisfaction figures come from [`PreferenceStats`], which the
//! scoring pass uses too, so the views cannot disagree with the score.

use std::collections::HashSet;

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{BalancingResult, Participant, ParticipantId, SlotAssignment, SlotId};

/// How assignments split between ranked and unranked seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreferenceStats {
    /// All seats filled.
    pub total: usize,
    /// Seats that went to someone's rank-1 choice.
    pub first_choice: usize,
    /// Seats that went to someone who ranked the slot (any rank).
    pub ranked: usize,
    /// Seats filled for coverage only.
    pub unranked: usize,
}

impl PreferenceStats {
    pub fn from_assignments(assignments: &[SlotAssignment]) -> Self {
        let mut stats = Self::default();
        for staff in assignments.iter().flat_map(|a| &a.assigned) {
            stats.total += 1;
            match staff.preference_rank {
                Some(1) => {
                    stats.first_choice += 1;
                    stats.ranked += 1;
                }
                Some(_) => stats.ranked += 1,
                None => stats.unranked += 1,
            }
        }
        stats
    }

    /// `ranked / total`, or 0 when nothing was assigned.
    pub fn satisfaction_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.ranked as f64 / self.total as f64
        }
    }

    /// `first_choice / total`, or 0 when nothing was assigned.
    pub fn first_choice_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.first_choice as f64 / self.total as f64
        }
    }
}

/// One shift held by a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffShift {
    pub slot_id: SlotId,
    pub slot_name: String,
    pub slot_date: NaiveDate,
    pub preference_rank: Option<u32>,
}

/// Everything one staff member was given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffSummary {
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
    /// Chronological.
    pub shifts: Vec<StaffShift>,
}

impl StaffSummary {
    /// Shifts the participant had ranked.
    pub fn ranked_count(&self) -> usize {
        self.shifts
            .iter()
            .filter(|s| s.preference_rank.is_some())
            .count()
    }

    /// Share of this participant's shifts that they ranked; 0 with no shifts.
    pub fn satisfaction_rate(&self) -> f64 {
        if self.shifts.is_empty() {
            0.0
        } else {
            self.ranked_count() as f64 / self.shifts.len() as f64
        }
    }
}

impl BalancingResult {
    pub fn preference_stats(&self) -> PreferenceStats {
        PreferenceStats::from_assignments(&self.assignments)
    }

    /// One summary per participant, in the order given. Participants with
    /// no shifts are included with an empty list.
    pub fn by_staff(&self, participants: &[Participant]) -> Vec<StaffSummary> {
        participants
            .iter()
            .map(|p| StaffSummary {
                participant_id: p.id.clone(),
                name: p.name.clone(),
                email: p.email.clone(),
                shifts: self
                    .assignments
                    .iter()
                    .filter_map(|a| {
                        a.assigned
                            .iter()
                            .find(|s| s.participant_id == p.id)
                            .map(|s| StaffShift {
                                slot_id: a.slot_id.clone(),
                                slot_name: a.slot_name.clone(),
                                slot_date: a.slot_date,
                                preference_rank: s.preference_rank,
                            })
                    })
                    .collect(),
            })
            .collect()
    }

    /// Participants who were given no shift at all.
    pub fn unassigned_staff<'a>(&self, participants: &'a [Participant]) -> Vec<&'a Participant> {
        let seated: HashSet<&ParticipantId> = self
            .assignments
            .iter()
            .flat_map(|a| a.assigned.iter().map(|s| &s.participant_id))
            .collect();
        participants
            .iter()
            .filter(|p| !seated.contains(&p.id))
            .collect()
    }
}
