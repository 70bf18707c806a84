mod common;

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use u_rota::balance::{BalanceConfig, BalanceRunner};
use u_rota::model::{ParticipantId, PreferenceSubmission, Survey};

/// Random surveys: up to 6 slots with small capacities spread over a week,
/// up to 9 participants each ranking a random subset of slots.
fn arb_survey() -> impl Strategy<Value = Survey> {
    (1usize..=6, 0usize..=9)
        .prop_flat_map(|(n_slots, n_people)| {
            (
                prop::collection::vec((1u32..=3, 20u32..=26), n_slots),
                prop::collection::vec(prop::collection::vec(0..n_slots, 0..=n_slots), n_people),
            )
        })
        .prop_map(|(slot_specs, prefs)| {
            let slots = slot_specs
                .iter()
                .enumerate()
                .map(|(i, &(cap, d))| common::slot(&format!("s{i}"), d, cap))
                .collect();
            let names: Vec<String> = (0..prefs.len()).map(|i| format!("p{i}")).collect();
            let participants = names.iter().map(|n| common::person(n)).collect();

            let mut survey = Survey::new(slots, participants);
            for (name, order) in names.iter().zip(prefs) {
                let mut seen = HashSet::new();
                let order: Vec<String> = order
                    .into_iter()
                    .filter(|s| seen.insert(*s))
                    .map(|s| format!("s{s}"))
                    .collect();
                if !order.is_empty() {
                    survey = survey.with_submission(PreferenceSubmission::from_order(name.as_str(), order));
                }
            }
            survey
        })
}

fn arb_cap() -> impl Strategy<Value = Option<usize>> {
    prop_oneof![Just(None), (1usize..=3).prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn capacity_and_uniqueness_hold(survey in arb_survey(), cap in arb_cap(), seed in any::<u64>()) {
        let config = BalanceConfig {
            max_assignments_per_participant: cap,
            ..BalanceConfig::default().with_seed(seed)
        };
        let result = BalanceRunner::run(&survey, &config).unwrap();

        prop_assert_eq!(result.assignments.len(), survey.slots.len());
        for a in &result.assignments {
            prop_assert!(a.assigned.len() <= a.required_count as usize);
            prop_assert_eq!(a.unassigned_count as usize, a.required_count as usize - a.assigned.len());
            let unique: HashSet<&ParticipantId> = a.assigned.iter().map(|s| &s.participant_id).collect();
            prop_assert_eq!(unique.len(), a.assigned.len());
        }

        let mut loads: HashMap<&ParticipantId, usize> = HashMap::new();
        for s in result.assignments.iter().flat_map(|a| &a.assigned) {
            *loads.entry(&s.participant_id).or_default() += 1;
        }
        if let Some(cap) = cap {
            prop_assert!(loads.values().all(|&l| l <= cap));
        }

        let short = result.assignments.iter().filter(|a| a.unassigned_count > 0).count();
        prop_assert_eq!(result.unmet_requirements.len(), short);
        prop_assert!(result.fairness_score <= 100);
    }

    #[test]
    fn ranks_match_submissions(survey in arb_survey(), seed in any::<u64>()) {
        let result = BalanceRunner::run(&survey, &BalanceConfig::default().with_seed(seed)).unwrap();
        for a in &result.assignments {
            for s in &a.assigned {
                if let Some(rank) = s.preference_rank {
                    let sub = &survey.submissions[&s.participant_id];
                    prop_assert_eq!(sub.rank_of(&a.slot_id), Some(rank));
                }
            }
        }
    }

    #[test]
    fn uncontested_top_choice_is_seated(survey in arb_survey(), cap in arb_cap(), seed in any::<u64>()) {
        let config = BalanceConfig {
            max_assignments_per_participant: cap,
            ..BalanceConfig::default().with_seed(seed)
        };
        let result = BalanceRunner::run(&survey, &config).unwrap();

        for (pid, sub) in &survey.submissions {
            let Some(top) = sub.ranked_slots.iter().min_by_key(|r| r.rank) else {
                continue;
            };
            let competitors = survey
                .submissions
                .values()
                .filter(|other| &other.participant_id != pid)
                .filter(|other| other.rank_of(&top.slot_id).is_some_and(|r| r <= top.rank))
                .count();
            let slot = result.slot(&top.slot_id).unwrap();
            if competitors < slot.required_count as usize {
                let seat = slot.assigned.iter().find(|a| &a.participant_id == pid);
                prop_assert!(seat.is_some(), "{} lost top choice {}", pid, top.slot_id);
                prop_assert_eq!(seat.and_then(|a| a.preference_rank), Some(top.rank));
            }
        }
    }

    #[test]
    fn short_slots_have_no_eligible_staff(survey in arb_survey(), cap in arb_cap(), seed in any::<u64>()) {
        let config = BalanceConfig {
            max_assignments_per_participant: cap,
            ..BalanceConfig::default().with_seed(seed)
        };
        let result = BalanceRunner::run(&survey, &config).unwrap();

        let mut loads: HashMap<&ParticipantId, usize> = HashMap::new();
        for s in result.assignments.iter().flat_map(|a| &a.assigned) {
            *loads.entry(&s.participant_id).or_default() += 1;
        }
        for a in result.assignments.iter().filter(|a| a.unassigned_count > 0) {
            for p in &survey.participants {
                let seated = a.contains(&p.id);
                let capped = cap.is_some_and(|c| loads.get(&p.id).copied().unwrap_or(0) >= c);
                prop_assert!(seated || capped, "{} could still cover {}", p.id, a.slot_id);
            }
        }
    }

    #[test]
    fn same_seed_same_result(survey in arb_survey(), seed in any::<u64>()) {
        let config = BalanceConfig::default().with_seed(seed).with_unlimited_assignments();
        let first = BalanceRunner::run(&survey, &config).unwrap();
        let second = BalanceRunner::run(&survey, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
