//! Survey input entities.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a shift slot.
    SlotId
);

string_id!(
    /// Stable identifier of a survey participant.
    ParticipantId
);

/// A shift slot (a holiday date that needs cover).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub id: SlotId,
    pub name: String,
    pub date: NaiveDate,
    /// Number of staff the slot needs. Must be at least 1.
    pub required_count: u32,
}

impl Slot {
    pub fn new(
        id: impl Into<SlotId>,
        name: impl Into<String>,
        date: NaiveDate,
        required_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            required_count,
        }
    }
}

/// A staff member who answered the survey.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        email: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            submitted_at,
        }
    }
}

/// One entry of a ranked preference list. Rank 1 is the most preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedSlot {
    pub slot_id: SlotId,
    pub rank: u32,
}

impl RankedSlot {
    pub fn new(slot_id: impl Into<SlotId>, rank: u32) -> Self {
        Self {
            slot_id: slot_id.into(),
            rank,
        }
    }
}

/// A participant's ranked preferences.
///
/// Slots a participant left out carry no preference. `notes` are shown to
/// humans and never influence balancing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreferenceSubmission {
    pub participant_id: ParticipantId,
    pub ranked_slots: Vec<RankedSlot>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub notes: Option<String>,
}

impl PreferenceSubmission {
    pub fn new(participant_id: impl Into<ParticipantId>, ranked_slots: Vec<RankedSlot>) -> Self {
        Self {
            participant_id: participant_id.into(),
            ranked_slots,
            notes: None,
        }
    }

    /// Builds a submission from slot ids in order of preference.
    pub fn from_order<I, S>(participant_id: impl Into<ParticipantId>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SlotId>,
    {
        let ranked_slots = slots
            .into_iter()
            .zip(1u32..)
            .map(|(slot, rank)| RankedSlot::new(slot, rank))
            .collect();
        Self::new(participant_id, ranked_slots)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Rank given to `slot`, if the participant ranked it.
    pub fn rank_of(&self, slot: &SlotId) -> Option<u32> {
        self.ranked_slots
            .iter()
            .find(|r| &r.slot_id == slot)
            .map(|r| r.rank)
    }
}

/// Everything one balancing run needs: the survey's slots, who answered and
/// what they ranked.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Survey {
    pub slots: Vec<Slot>,
    pub participants: Vec<Participant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub submissions: HashMap<ParticipantId, PreferenceSubmission>,
}

impl Survey {
    pub fn new(slots: Vec<Slot>, participants: Vec<Participant>) -> Self {
        Self {
            slots,
            participants,
            submissions: HashMap::new(),
        }
    }

    /// Adds (or replaces) a submission, keyed by its participant id.
    pub fn with_submission(mut self, submission: PreferenceSubmission) -> Self {
        self.submissions
            .insert(submission.participant_id.clone(), submission);
        self
    }

    /// Total staff required across all slots.
    pub fn total_required(&self) -> u64 {
        self.slots.iter().map(|s| u64::from(s.required_count)).sum()
    }
}
