//! Balancing execution.
//!
//! # Algorithm
//!
//! 1. Validate config and survey; reject before any work is done
//! 2. Order slots chronologically (input order breaks date ties)
//! 3. Ranking pass: seat participants on slots they ranked
//! 4. Gap-filling pass: seat least-loaded participants on short slots
//! 5. Scoring pass: fairness score and unmet requirement lines
//!
//! A run owns all of its state, so repeated or concurrent runs never see
//! each other's seats. Given the same survey and seed the result is
//! identical.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::BalanceError;
use crate::input::validate;
use crate::model::{
    AssignedStaff, BalancingResult, Participant, ParticipantId, PreferenceSubmission, Slot,
    SlotAssignment, SlotId, Survey,
};

use super::config::BalanceConfig;
use super::gap_fill::gap_fill_pass;
use super::ranking::ranking_pass;
use super::rules::{candidate_engine, Candidate};
use super::scoring;
use super::tracker::AssignmentTracker;

/// Executes staff-to-slot balancing.
pub struct BalanceRunner;

impl BalanceRunner {
    /// Balances one survey.
    ///
    /// # Errors
    ///
    /// [`BalanceError::InvalidConfig`] if `config` fails validation and
    /// [`BalanceError::InvalidInput`] if the survey is malformed. Too few
    /// staff is not an error; see [`BalancingResult::unmet_requirements`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use u_rota::balance::{BalanceConfig, BalanceRunner};
    /// use u_rota::model::{Participant, PreferenceSubmission, Slot, Survey};
    ///
    /// let xmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
    /// let at = Utc.with_ymd_and_hms(2026, 11, 1, 9, 0, 0).unwrap();
    ///
    /// let survey = Survey::new(
    ///     vec![Slot::new("xmas", "Christmas Day", xmas, 1)],
    ///     vec![Participant::new("ana", "Ana", "ana@example.com", at)],
    /// )
    /// .with_submission(PreferenceSubmission::from_order("ana", ["xmas"]));
    ///
    /// let result = BalanceRunner::run(&survey, &BalanceConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.fairness_score, 100);
    /// assert!(result.unmet_requirements.is_empty());
    /// ```
    pub fn run(survey: &Survey, config: &BalanceConfig) -> Result<BalancingResult, BalanceError> {
        execute(
            &survey.slots,
            &survey.participants,
            &survey.submissions,
            config,
        )
    }

    /// Balances independent surveys in parallel.
    ///
    /// Each survey gets its own RNG seeded from `config.seed` (or a fresh
    /// seed), so results match what [`run`](Self::run) returns one by one.
    #[cfg(feature = "parallel")]
    pub fn run_many(
        surveys: &[Survey],
        config: &BalanceConfig,
    ) -> Vec<Result<BalancingResult, BalanceError>> {
        use rayon::prelude::*;

        surveys
            .par_iter()
            .map(|survey| Self::run(survey, config))
            .collect()
    }
}

/// Balances staff onto slots.
///
/// Convenience form of [`BalanceRunner::run`] with the default config and an
/// optional tie-break seed.
///
/// # Errors
///
/// [`BalanceError::InvalidInput`] if the survey is malformed.
pub fn balance(
    slots: &[Slot],
    participants: &[Participant],
    submissions: &HashMap<ParticipantId, PreferenceSubmission>,
    seed: Option<u64>,
) -> Result<BalancingResult, BalanceError> {
    let config = BalanceConfig {
        seed,
        ..BalanceConfig::default()
    };
    execute(slots, participants, submissions, &config)
}

fn execute(
    slots: &[Slot],
    participants: &[Participant],
    submissions: &HashMap<ParticipantId, PreferenceSubmission>,
    config: &BalanceConfig,
) -> Result<BalancingResult, BalanceError> {
    config.validate().map_err(BalanceError::InvalidConfig)?;
    validate(slots, participants, submissions)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by_key(|&i| slots[i].date);

    let ranked_by = ranked_candidates(slots, participants, submissions);

    let capacities = slots.iter().map(|s| s.required_count as usize).collect();
    let mut tracker = AssignmentTracker::new(
        capacities,
        participants.len(),
        config.max_assignments_per_participant,
    );
    let engine = candidate_engine(config.tie_breaker);

    let by_preference = ranking_pass(slots, &order, &ranked_by, &mut tracker, &engine, &mut rng);
    let by_coverage = gap_fill_pass(
        slots,
        &order,
        participants.len(),
        &mut tracker,
        &engine,
        &mut rng,
    );

    let assignments: Vec<SlotAssignment> = order
        .iter()
        .map(|&s| slot_assignment(&slots[s], &tracker, s, participants))
        .collect();

    let (fairness_score, breakdown) =
        scoring::score(&assignments, participants.len(), &config.weights);
    let unmet_requirements = scoring::unmet_requirements(&assignments);

    info!(
        seed,
        slots = slots.len(),
        participants = participants.len(),
        by_preference,
        by_coverage,
        unmet = unmet_requirements.len(),
        fairness_score,
        "balanced assignments"
    );

    Ok(BalancingResult {
        assignments,
        fairness_score,
        unmet_requirements,
        breakdown,
        seed,
    })
}

/// For each slot, everyone who ranked it (participant input order).
fn ranked_candidates(
    slots: &[Slot],
    participants: &[Participant],
    submissions: &HashMap<ParticipantId, PreferenceSubmission>,
) -> Vec<Vec<Candidate>> {
    let slot_index: HashMap<&SlotId, usize> =
        slots.iter().enumerate().map(|(i, s)| (&s.id, i)).collect();

    let mut ranked_by = vec![Vec::new(); slots.len()];
    for (p, participant) in participants.iter().enumerate() {
        let Some(submission) = submissions.get(&participant.id) else {
            continue;
        };
        for entry in &submission.ranked_slots {
            if let Some(&s) = slot_index.get(&entry.slot_id) {
                ranked_by[s].push(Candidate {
                    participant: p,
                    rank: Some(entry.rank),
                });
            }
        }
    }
    ranked_by
}

fn slot_assignment(
    slot: &Slot,
    tracker: &AssignmentTracker,
    index: usize,
    participants: &[Participant],
) -> SlotAssignment {
    let assigned: Vec<AssignedStaff> = tracker
        .seats(index)
        .iter()
        .map(|seat| {
            let p = &participants[seat.participant];
            AssignedStaff {
                participant_id: p.id.clone(),
                name: p.name.clone(),
                email: p.email.clone(),
                preference_rank: seat.rank,
            }
        })
        .collect();

    SlotAssignment {
        slot_id: slot.id.clone(),
        slot_name: slot.name.clone(),
        slot_date: slot.date,
        required_count: slot.required_count,
        unassigned_count: tracker.remaining(index) as u32,
        assigned,
    }
}
