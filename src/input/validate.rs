//! Structural checks run before any balancing work.
//!
//! Checks run in a fixed order (slots, participants, then submissions sorted
//! by participant id) so the same bad survey always reports the same error.

use std::collections::{HashMap, HashSet};

use crate::error::InvalidInput;
use crate::model::{Participant, ParticipantId, PreferenceSubmission, Slot};

/// Validates a survey.
///
/// # Errors
///
/// Returns the first [`InvalidInput`] found:
/// - a slot requiring zero staff, or a repeated slot id;
/// - a repeated participant id;
/// - a submission keyed by an unknown participant, or keyed under a
///   different id than the one it carries;
/// - a ranked entry naming an unknown slot, using rank 0, repeating a rank,
///   or ranking the same slot twice.
pub fn validate(
    slots: &[Slot],
    participants: &[Participant],
    submissions: &HashMap<ParticipantId, PreferenceSubmission>,
) -> Result<(), InvalidInput> {
    let mut slot_ids = HashSet::with_capacity(slots.len());
    for slot in slots {
        if slot.required_count == 0 {
            return Err(InvalidInput::ZeroCapacity {
                slot: slot.id.clone(),
            });
        }
        if !slot_ids.insert(&slot.id) {
            return Err(InvalidInput::DuplicateSlot(slot.id.clone()));
        }
    }

    let mut participant_ids = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !participant_ids.insert(&participant.id) {
            return Err(InvalidInput::DuplicateParticipant(participant.id.clone()));
        }
    }

    let mut keys: Vec<&ParticipantId> = submissions.keys().collect();
    keys.sort();

    for key in keys {
        let submission = &submissions[key];
        if !participant_ids.contains(key) {
            return Err(InvalidInput::UnknownParticipant(key.clone()));
        }
        if &submission.participant_id != key {
            return Err(InvalidInput::MismatchedSubmission {
                key: key.clone(),
                participant: submission.participant_id.clone(),
            });
        }

        let mut ranks = HashSet::with_capacity(submission.ranked_slots.len());
        let mut ranked = HashSet::with_capacity(submission.ranked_slots.len());
        for entry in &submission.ranked_slots {
            if !slot_ids.contains(&entry.slot_id) {
                return Err(InvalidInput::UnknownSlot {
                    participant: key.clone(),
                    slot: entry.slot_id.clone(),
                });
            }
            if entry.rank == 0 {
                return Err(InvalidInput::ZeroRank {
                    participant: key.clone(),
                    slot: entry.slot_id.clone(),
                });
            }
            if !ranks.insert(entry.rank) {
                return Err(InvalidInput::DuplicateRank {
                    participant: key.clone(),
                    rank: entry.rank,
                });
            }
            if !ranked.insert(&entry.slot_id) {
                return Err(InvalidInput::DuplicateSlotRank {
                    participant: key.clone(),
                    slot: entry.slot_id.clone(),
                });
            }
        }
    }

    Ok(())
}
