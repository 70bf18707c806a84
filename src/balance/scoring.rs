//! Pass 3: quality score and unmet requirements.
//!
//! ```text
//! coverage    = sum(min(assigned, required)) / sum(required)
//! preference  = ranked assignments / all assignments      (0 if none)
//! workload    = clamp(1 - stddev(loads) / mean(loads), 0, 1)
//! score       = round(100 * (w_c * coverage + w_p * preference + w_w * workload))
//! ```
//!
//! Workload is measured over participants holding at least one seat and is
//! 1.0 when fewer than two participants hold seats. A survey with no slots
//! or no participants scores 0.

use std::collections::HashMap;

use crate::model::{ParticipantId, ScoreBreakdown, SlotAssignment};
use crate::report::PreferenceStats;

use super::config::ScoreWeights;

/// Filled seats over required seats, in `[0, 1]`. Zero when nothing is
/// required.
pub fn coverage(assignments: &[SlotAssignment]) -> f64 {
    let required: u64 = assignments
        .iter()
        .map(|a| u64::from(a.required_count))
        .sum();
    if required == 0 {
        return 0.0;
    }
    let filled: u64 = assignments
        .iter()
        .map(|a| (a.assigned.len() as u64).min(u64::from(a.required_count)))
        .sum();
    filled as f64 / required as f64
}

/// `1 - coefficient of variation` of the given loads, clamped to `[0, 1]`.
///
/// Zero loads are ignored.
pub fn workload_balance<I: IntoIterator<Item = usize>>(loads: I) -> f64 {
    let loads: Vec<f64> = loads
        .into_iter()
        .filter(|&l| l > 0)
        .map(|l| l as f64)
        .collect();
    if loads.len() < 2 {
        return 1.0;
    }
    let n = loads.len() as f64;
    let mean = loads.iter().sum::<f64>() / n;
    let variance = loads.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
    (1.0 - variance.sqrt() / mean).clamp(0.0, 1.0)
}

/// Seats held per participant across all slots.
pub fn loads_by_participant(assignments: &[SlotAssignment]) -> HashMap<&ParticipantId, usize> {
    let mut loads = HashMap::new();
    for staff in assignments.iter().flat_map(|a| &a.assigned) {
        *loads.entry(&staff.participant_id).or_insert(0) += 1;
    }
    loads
}

/// Computes the sub-scores for a finished assignment.
pub fn breakdown(assignments: &[SlotAssignment]) -> ScoreBreakdown {
    ScoreBreakdown {
        coverage: coverage(assignments),
        preference_satisfaction: PreferenceStats::from_assignments(assignments).satisfaction_rate(),
        workload_balance: workload_balance(loads_by_participant(assignments).into_values()),
    }
}

/// Combines sub-scores into a 0..=100 score.
pub fn fairness_score(breakdown: &ScoreBreakdown, weights: &ScoreWeights) -> u32 {
    let weighted = weights.coverage * breakdown.coverage
        + weights.preference * breakdown.preference_satisfaction
        + weights.workload * breakdown.workload_balance;
    (100.0 * weighted).round().clamp(0.0, 100.0) as u32
}

/// Scores a finished assignment. Empty surveys score 0.
pub fn score(
    assignments: &[SlotAssignment],
    participant_count: usize,
    weights: &ScoreWeights,
) -> (u32, ScoreBreakdown) {
    if assignments.is_empty() || participant_count == 0 {
        return (0, ScoreBreakdown::ZERO);
    }
    let b = breakdown(assignments);
    (fairness_score(&b, weights), b)
}

/// One line per slot left under capacity, in slot order.
pub fn unmet_requirements(assignments: &[SlotAssignment]) -> Vec<String> {
    assignments
        .iter()
        .filter(|a| a.unassigned_count > 0)
        .map(|a| format!("{}: needs {} more staff", a.slot_name, a.unassigned_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssignedStaff;
    use chrono::NaiveDate;

    fn staff(id: &str, rank: Option<u32>) -> AssignedStaff {
        AssignedStaff {
            participant_id: ParticipantId::from(id),
            name: id.to_owned(),
            email: format!("{id}@example.com"),
            preference_rank: rank,
        }
    }

    fn slot(name: &str, required: u32, assigned: Vec<AssignedStaff>) -> SlotAssignment {
        let unassigned_count = required.saturating_sub(assigned.len() as u32);
        SlotAssignment {
            slot_id: name.into(),
            slot_name: name.to_owned(),
            slot_date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
            required_count: required,
            assigned,
            unassigned_count,
        }
    }

    #[test]
    fn test_coverage_fraction() {
        let a = vec![
            slot("a", 2, vec![staff("x", Some(1)), staff("y", None)]),
            slot("b", 2, vec![]),
        ];
        assert!((coverage(&a) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_workload_balance_even() {
        assert!((workload_balance([2, 2, 2]) - 1.0).abs() < 1e-12);
        assert!((workload_balance([]) - 1.0).abs() < 1e-12);
        assert!((workload_balance([5]) - 1.0).abs() < 1e-12);
        // Zero loads are not counted.
        assert!((workload_balance([0, 0, 3]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_workload_balance_skewed() {
        // mean 2, stddev 1 -> 0.5
        let b = workload_balance([1, 3]);
        assert!((b - 0.5).abs() < 1e-12);
        // Heavy skew clamps at zero.
        assert_eq!(workload_balance([1, 1, 1, 20]), 0.0);
    }

    #[test]
    fn test_score_all_good() {
        let a = vec![slot("a", 1, vec![staff("x", Some(1))])];
        let (score, b) = score(&a, 1, &ScoreWeights::default());
        assert_eq!(score, 100);
        assert!((b.coverage - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_mixed() {
        // coverage 3/4, preference 1/3, workload 1.0
        let a = vec![
            slot("a", 2, vec![staff("x", Some(1)), staff("y", None)]),
            slot("b", 2, vec![staff("z", None)]),
        ];
        let (score, _) = score(&a, 3, &ScoreWeights::default());
        // 100 * (0.4 * 0.75 + 0.4 / 3 + 0.2) = 63.33
        assert_eq!(score, 63);
    }

    #[test]
    fn test_empty_scores_zero() {
        let a = vec![slot("a", 3, vec![])];
        assert_eq!(score(&a, 0, &ScoreWeights::default()).0, 0);
        assert_eq!(score(&[], 4, &ScoreWeights::default()).0, 0);
    }

    #[test]
    fn test_unmet_lines() {
        let a = vec![
            slot("Christmas Day", 3, vec![staff("x", Some(1))]),
            slot("Boxing Day", 1, vec![staff("y", None)]),
        ];
        assert_eq!(unmet_requirements(&a), vec!["Christmas Day: needs 2 more staff"]);
    }
}
