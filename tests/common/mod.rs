#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use u_rota::model::{Participant, PreferenceSubmission, RankedSlot, Slot};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, d).unwrap()
}

pub fn slot(id: &str, d: u32, required: u32) -> Slot {
    Slot::new(id, format!("Slot {id}"), day(d), required)
}

pub fn person(id: &str) -> Participant {
    let at = Utc.with_ymd_and_hms(2026, 11, 1, 9, 0, 0).unwrap();
    Participant::new(id, id.to_uppercase(), format!("{id}@example.com"), at)
}

pub fn people(ids: &[&str]) -> Vec<Participant> {
    ids.iter().map(|id| person(id)).collect()
}

pub fn ranks(participant: &str, entries: &[(&str, u32)]) -> PreferenceSubmission {
    PreferenceSubmission::new(
        participant,
        entries
            .iter()
            .map(|&(slot, rank)| RankedSlot::new(slot, rank))
            .collect(),
    )
}
