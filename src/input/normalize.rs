//! Legacy preference payloads.
//!
//! Older survey versions stored preferences as a plain ordered list, as a
//! slot -> rank map, or as free text. Everything is folded into the one
//! canonical [`PreferenceSubmission`] shape here; the balancer never sees
//! the raw forms.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{ParticipantId, PreferenceSubmission, RankedSlot, SlotId};

/// A preference payload in any of the accepted legacy shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum RawPreference {
    /// `[{ "slot_id": .., "rank": .. }, ..]`
    Ranked(Vec<RankedSlot>),
    /// `["slot-a", "slot-b", ..]`, most preferred first.
    Ordered(Vec<SlotId>),
    /// `{ "slot-a": 1, "slot-b": 2 }`
    Keyed(BTreeMap<SlotId, u32>),
    /// Free text with no usable ranking.
    Text(String),
}

/// A submission as it arrives from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSubmission {
    pub participant_id: ParticipantId,
    pub preferences: RawPreference,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

impl RawPreference {
    /// Converts to ranked entries, sorted by rank.
    ///
    /// Text yields no entries. Duplicates are kept so validation can
    /// report them.
    pub fn into_ranked(self) -> Vec<RankedSlot> {
        let mut ranked = match self {
            RawPreference::Ranked(list) => list,
            RawPreference::Ordered(order) => order
                .into_iter()
                .zip(1u32..)
                .map(|(slot_id, rank)| RankedSlot { slot_id, rank })
                .collect(),
            RawPreference::Keyed(map) => map
                .into_iter()
                .map(|(slot_id, rank)| RankedSlot { slot_id, rank })
                .collect(),
            RawPreference::Text(_) => Vec::new(),
        };
        ranked.sort_by_key(|r| r.rank);
        ranked
    }
}

impl RawSubmission {
    /// Folds the raw payload into a [`PreferenceSubmission`].
    ///
    /// Free-text payloads are appended to `notes`.
    pub fn normalize(self) -> PreferenceSubmission {
        let RawSubmission {
            participant_id,
            preferences,
            notes,
        } = self;

        let notes = match (&preferences, notes) {
            (RawPreference::Text(text), Some(existing)) if !text.trim().is_empty() => {
                Some(format!("{existing}\n{}", text.trim()))
            }
            (RawPreference::Text(text), None) if !text.trim().is_empty() => {
                Some(text.trim().to_owned())
            }
            (_, notes) => notes,
        };

        PreferenceSubmission {
            participant_id,
            ranked_slots: preferences.into_ranked(),
            notes,
        }
    }
}
