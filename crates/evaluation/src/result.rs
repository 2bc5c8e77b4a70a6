//! Evaluation result record.

use kinerja_core::Score;
use serde::{Deserialize, Serialize};

/// Qualitative performance tier derived from the total weighted score.
///
/// Tier boundaries are inclusive at the lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
    VeryPoor,
}

impl Predicate {
    /// Tier for a total score.
    pub fn from_total(total: Score) -> Self {
        let value = total.value();
        if value >= 90.0 {
            Predicate::Excellent
        } else if value >= 74.0 {
            Predicate::Good
        } else if value >= 53.0 {
            Predicate::NeedsImprovement
        } else if value >= 42.0 {
            Predicate::Poor
        } else {
            Predicate::VeryPoor
        }
    }

    /// Human-readable label used in the recommendation and the report.
    pub fn label(&self) -> &'static str {
        match self {
            Predicate::Excellent => "Excellent",
            Predicate::Good => "Good",
            Predicate::NeedsImprovement => "Needs Improvement",
            Predicate::Poor => "Poor",
            Predicate::VeryPoor => "Very Poor",
        }
    }

    /// The top three tiers qualify for renewal (absent a fatal violation).
    pub fn qualifies_for_renewal(&self) -> bool {
        matches!(
            self,
            Predicate::Excellent | Predicate::Good | Predicate::NeedsImprovement
        )
    }
}

impl core::fmt::Display for Predicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// The six category sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub discipline: Score,
    pub task_achievement: Score,
    pub integrity: Score,
    pub job_availability: Score,
    pub behavior: Score,
    pub qualification: Score,
}

impl ScoreBreakdown {
    /// All sub-scores zero (health-gate short circuit).
    pub fn zero() -> Self {
        Self {
            discipline: Score::MIN,
            task_achievement: Score::MIN,
            integrity: Score::MIN,
            job_availability: Score::MIN,
            behavior: Score::MIN,
            qualification: Score::MIN,
        }
    }

    /// Category rows as (label, weight label, score), in report order.
    pub fn rows(&self) -> [(&'static str, &'static str, Score); 6] {
        [
            ("Discipline", "40%", self.discipline),
            ("Task Achievement", "15%", self.task_achievement),
            ("Integrity", "10%", self.integrity),
            ("Job Availability", "10%", self.job_availability),
            ("Work Behavior", "15%", self.behavior),
            ("Qualification", "10%", self.qualification),
        ]
    }
}

/// Complete evaluation outcome; a pure function of the input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub scores: ScoreBreakdown,
    pub total: Score,
    pub predicate: Predicate,
    pub is_eligible: bool,
    /// Severe disciplinary breach; forces ineligibility regardless of tier.
    pub fatal_violation: bool,
    pub recommendation: String,
    pub is_healthy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive_at_the_lower_edge() {
        assert_eq!(Predicate::from_total(Score::new(90.0)), Predicate::Excellent);
        assert_eq!(Predicate::from_total(Score::new(89.99)), Predicate::Good);
        assert_eq!(Predicate::from_total(Score::new(74.0)), Predicate::Good);
        assert_eq!(
            Predicate::from_total(Score::new(53.0)),
            Predicate::NeedsImprovement
        );
        assert_eq!(Predicate::from_total(Score::new(52.99)), Predicate::Poor);
        assert_eq!(Predicate::from_total(Score::new(42.0)), Predicate::Poor);
        assert_eq!(Predicate::from_total(Score::new(41.99)), Predicate::VeryPoor);
        assert_eq!(Predicate::from_total(Score::MIN), Predicate::VeryPoor);
    }

    #[test]
    fn top_three_tiers_qualify() {
        assert!(Predicate::Excellent.qualifies_for_renewal());
        assert!(Predicate::Good.qualifies_for_renewal());
        assert!(Predicate::NeedsImprovement.qualifies_for_renewal());
        assert!(!Predicate::Poor.qualifies_for_renewal());
        assert!(!Predicate::VeryPoor.qualifies_for_renewal());
    }
}
