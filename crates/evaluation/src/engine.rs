//! The evaluation engine entrypoint.
//!
//! A single total function: complete input record in, complete result record
//! out. No validation, no I/O, no hidden state; callers may re-run it on
//! every form keystroke.

use kinerja_core::Score;

use crate::category;
use crate::discipline;
use crate::input::EvaluationInput;
use crate::result::{EvaluationResult, Predicate, ScoreBreakdown};

/// Top-level category weights; must sum to 1.
const DISCIPLINE_WEIGHT: f64 = 0.40;
const TASK_ACHIEVEMENT_WEIGHT: f64 = 0.15;
const INTEGRITY_WEIGHT: f64 = 0.10;
const JOB_AVAILABILITY_WEIGHT: f64 = 0.10;
const BEHAVIOR_WEIGHT: f64 = 0.15;
const QUALIFICATION_WEIGHT: f64 = 0.10;

/// Evaluate one employee record.
pub fn evaluate(input: &EvaluationInput) -> EvaluationResult {
    // Health gate: nothing else is evaluated for an unhealthy employee.
    if !input.is_healthy {
        return EvaluationResult {
            scores: ScoreBreakdown::zero(),
            total: Score::MIN,
            predicate: Predicate::VeryPoor,
            is_eligible: false,
            fatal_violation: false,
            recommendation: "NOT RECOMMENDED for contract renewal: the health \
                             requirement is not met."
                .to_string(),
            is_healthy: false,
        };
    }

    let scores = ScoreBreakdown {
        discipline: discipline::score(&input.discipline, input.contract_type),
        task_achievement: category::task_achievement_score(input.task_achievement),
        integrity: category::integrity_score(input.integrity),
        job_availability: category::job_availability_score(input.job_availability),
        behavior: category::behavior_score(input.behavior),
        qualification: category::qualification_score(&input.qualification),
    };

    let total = Score::new(
        scores.discipline.weighted(DISCIPLINE_WEIGHT)
            + scores.task_achievement.weighted(TASK_ACHIEVEMENT_WEIGHT)
            + scores.integrity.weighted(INTEGRITY_WEIGHT)
            + scores.job_availability.weighted(JOB_AVAILABILITY_WEIGHT)
            + scores.behavior.weighted(BEHAVIOR_WEIGHT)
            + scores.qualification.weighted(QUALIFICATION_WEIGHT),
    );

    let predicate = Predicate::from_total(total);
    let fatal_violation = discipline::fatal_violation(&input.discipline, input.contract_type);
    let is_eligible = predicate.qualifies_for_renewal() && !fatal_violation;
    let recommendation = recommendation(total, predicate, fatal_violation);

    EvaluationResult {
        scores,
        total,
        predicate,
        is_eligible,
        fatal_violation,
        recommendation,
        is_healthy: true,
    }
}

/// Templated recommendation sentence, selected by a 4-way branch.
fn recommendation(total: Score, predicate: Predicate, fatal_violation: bool) -> String {
    if fatal_violation {
        return format!(
            "Based on a final score of {total} with predicate {predicate}, but due to a \
             SEVERE DISCIPLINARY BREACH (28 or more unexcused-absence days AND 10 \
             consecutive absence days without valid authorization), the employee is NOT \
             RECOMMENDED for contract renewal."
        );
    }

    match predicate {
        Predicate::Excellent => format!(
            "Based on a final score of {total} with predicate {predicate}, the employee \
             is RECOMMENDED for contract renewal."
        ),
        Predicate::Good | Predicate::NeedsImprovement => format!(
            "Based on a final score of {total} with predicate {predicate}, the employee \
             MAY BE CONSIDERED for contract renewal."
        ),
        Predicate::Poor | Predicate::VeryPoor => format!(
            "Based on a final score of {total} with predicate {predicate}, the employee \
             is NOT RECOMMENDED for contract renewal."
        ),
    }
}
