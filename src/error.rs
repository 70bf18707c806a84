//! Error types.
//!
//! Structural problems with a survey are reported as [`InvalidInput`] before
//! any assignment work starts. A survey that simply has too few staff is not
//! an error: the shortfall shows up in
//! [`BalancingResult::unmet_requirements`](crate::model::BalancingResult).

use thiserror::Error;

use crate::model::{ParticipantId, SlotId};

/// Malformed survey data rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("slot `{slot}` must require at least one staff member")]
    ZeroCapacity { slot: SlotId },

    #[error("slot id `{0}` appears more than once")]
    DuplicateSlot(SlotId),

    #[error("participant id `{0}` appears more than once")]
    DuplicateParticipant(ParticipantId),

    #[error("submission for unknown participant `{0}`")]
    UnknownParticipant(ParticipantId),

    #[error("submission keyed by `{key}` belongs to participant `{participant}`")]
    MismatchedSubmission {
        key: ParticipantId,
        participant: ParticipantId,
    },

    #[error("participant `{participant}` ranked unknown slot `{slot}`")]
    UnknownSlot {
        participant: ParticipantId,
        slot: SlotId,
    },

    #[error("participant `{participant}` gave slot `{slot}` rank 0; ranks start at 1")]
    ZeroRank {
        participant: ParticipantId,
        slot: SlotId,
    },

    #[error("participant `{participant}` used rank {rank} more than once")]
    DuplicateRank {
        participant: ParticipantId,
        rank: u32,
    },

    #[error("participant `{participant}` ranked slot `{slot}` more than once")]
    DuplicateSlotRank {
        participant: ParticipantId,
        slot: SlotId,
    },
}

/// Errors returned by [`BalanceRunner`](crate::balance::BalanceRunner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("invalid balance config: {0}")]
    InvalidConfig(String),
}
