//! Survey inputs and balancing outputs.
//!
//! Inputs ([`Slot`], [`Participant`], [`PreferenceSubmission`]) are read-only
//! for the duration of a run. A [`BalancingResult`] is built fresh on every
//! run; nothing is carried over from earlier results.

mod result;
mod types;

pub use result::{AssignedStaff, BalancingResult, ScoreBreakdown, SlotAssignment};
pub use types::{
    Participant, ParticipantId, PreferenceSubmission, RankedSlot, Slot, SlotId, Survey,
};
