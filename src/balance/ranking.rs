//! Pass 1: seat participants on slots they ranked.
//!
//! # Algorithm
//!
//! Without a load cap, slots are visited once each in chronological order.
//! For each slot:
//!
//! 1. Drop candidates already seated there
//! 2. Order the rest by rank, then running load (fewest first), then
//!    tie-breaker
//! 3. Seat from the top until the slot is full
//!
//! With a cap, claims are processed in rank rounds instead. Round `r` visits
//! every slot in chronological order and considers only participants who
//! gave that slot rank `r`, dropping anyone at their cap. Every rank-1 claim
//! is settled before any rank-2 claim, so a lower choice on an earlier date
//! never uses up a participant's cap ahead of a higher choice later in the
//! calendar.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, trace};

use crate::dispatching::RuleEngine;
use crate::model::Slot;

use super::rules::Candidate;
use super::tracker::AssignmentTracker;

/// Runs the ranking pass. Returns the number of seats filled.
///
/// `ranked_by[s]` lists, in participant input order, everyone who ranked
/// slot `s` together with their rank. `order` is the slot processing order.
pub fn ranking_pass<R: Rng + ?Sized>(
    slots: &[Slot],
    order: &[usize],
    ranked_by: &[Vec<Candidate>],
    tracker: &mut AssignmentTracker,
    engine: &RuleEngine<Candidate, AssignmentTracker>,
    rng: &mut R,
) -> usize {
    if !tracker.is_capped() {
        return order
            .iter()
            .map(|&slot| {
                seat_claims(slots, slot, &ranked_by[slot], None, tracker, engine, rng)
            })
            .sum();
    }

    let rounds: BTreeSet<u32> = ranked_by
        .iter()
        .flatten()
        .filter_map(|c| c.rank)
        .collect();

    let mut filled = 0;
    for &rank in &rounds {
        for &slot in order {
            filled += seat_claims(slots, slot, &ranked_by[slot], Some(rank), tracker, engine, rng);
        }
    }
    filled
}

/// Seats the claims on one slot, restricted to `round` when given.
fn seat_claims<R: Rng + ?Sized>(
    slots: &[Slot],
    slot: usize,
    claims: &[Candidate],
    round: Option<u32>,
    tracker: &mut AssignmentTracker,
    engine: &RuleEngine<Candidate, AssignmentTracker>,
    rng: &mut R,
) -> usize {
    if tracker.is_full(slot) {
        return 0;
    }

    let candidates: Vec<Candidate> = claims
        .iter()
        .filter(|c| round.map_or(true, |r| c.rank == Some(r)))
        .filter(|c| tracker.can_seat(slot, c.participant))
        .copied()
        .collect();
    if candidates.is_empty() {
        return 0;
    }

    let picks = engine.sort_indices(&candidates, tracker, rng);
    let mut seated = 0;
    for i in picks {
        if tracker.is_full(slot) {
            break;
        }
        let c = candidates[i];
        if tracker.seat(slot, c.participant, c.rank) {
            trace!(
                slot = %slots[slot].id,
                participant = c.participant,
                rank = ?c.rank,
                "seated by preference"
            );
            seated += 1;
        }
    }

    debug!(
        slot = %slots[slot].id,
        round = ?round,
        candidates = candidates.len(),
        seated,
        remaining = tracker.remaining(slot),
        "ranking pass"
    );
    seated
}
