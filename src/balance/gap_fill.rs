//! Pass 2: fill remaining seats for coverage.
//!
//! Slots still short after the ranking pass draw from everyone not yet
//! seated on them and below their load cap, least-loaded first. Loads keep
//! accumulating across slots, so later slots in the processing order see the
//! seats handed out earlier. Seats filled here carry no preference rank.

use rand::Rng;
use tracing::{debug, trace};

use crate::dispatching::RuleEngine;
use crate::model::Slot;

use super::rules::Candidate;
use super::tracker::AssignmentTracker;

/// Runs the gap-filling pass. Returns the number of seats filled.
pub fn gap_fill_pass<R: Rng + ?Sized>(
    slots: &[Slot],
    order: &[usize],
    participant_count: usize,
    tracker: &mut AssignmentTracker,
    engine: &RuleEngine<Candidate, AssignmentTracker>,
    rng: &mut R,
) -> usize {
    let mut filled = 0;

    for &slot in order {
        if tracker.is_full(slot) {
            continue;
        }

        let candidates: Vec<Candidate> = (0..participant_count)
            .filter(|&p| tracker.can_seat(slot, p))
            .map(|participant| Candidate {
                participant,
                rank: None,
            })
            .collect();

        let picks = engine.sort_indices(&candidates, tracker, rng);
        let mut seated = 0;
        for i in picks {
            if tracker.is_full(slot) {
                break;
            }
            let participant = candidates[i].participant;
            if tracker.seat(slot, participant, None) {
                trace!(slot = %slots[slot].id, participant, "seated for coverage");
                seated += 1;
            }
        }

        debug!(
            slot = %slots[slot].id,
            candidates = candidates.len(),
            seated,
            remaining = tracker.remaining(slot),
            "gap fill"
        );
        filled += seated;
    }

    filled
}
