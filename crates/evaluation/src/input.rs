//! Evaluation input record.
//!
//! One immutable record per evaluation. The presentation layer owns all
//! user-facing validation and defaults; everything that reaches this crate
//! is already type-valid, so the engine treats the record as a total input
//! domain.

use serde::{Deserialize, Serialize};

/// Contract length, which decides whether discipline scoring looks at one
/// or two years of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    OneYear,
    FiveYears,
}

/// Graded predicate used for both task-achievement (SKP) and work-behavior
/// assessments.
///
/// `NotSubmitted` exists for employees who never filed the assessment at
/// all; both category tables map it to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformancePredicate {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
    VeryPoor,
    NotSubmitted,
}

/// Severity of any recorded integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityLevel {
    None,
    Minor,
    Moderate,
    Severe,
}

/// Whether the employee's position still exists and is staffed full-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobAvailability {
    Available,
    NotAvailable,
    /// Position exists but with reduced teaching/working hours; scored the
    /// same as not available.
    ReducedHours,
}

/// Discipline facts for a single evaluation year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearDiscipline {
    /// Unexcused-absence days (TKS) in the year.
    pub absence_days: u32,
    /// Cumulative short-hour deficit, in hours.
    pub short_hours: f64,
    /// Flagged: 28 or more cumulative unexcused-absence days.
    pub absent_over_28_days: bool,
    /// Flagged: 10 consecutive unexcused-absence days.
    pub absent_10_consecutive: bool,
}

/// Discipline history: current year always, prior year only consulted for
/// five-year contracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRecord {
    pub current: YearDiscipline,
    /// A missing prior year scores as an all-zero year.
    pub prior: Option<YearDiscipline>,
}

/// Qualification facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationRecord {
    pub education_matched: bool,
    /// Completed training hours (JP) in the evaluation period.
    pub training_hours: u32,
    pub orientation_completed: bool,
}

/// Identity fields; free text, carried through to the report verbatim and
/// never part of the computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    pub name: String,
    pub employee_number: String,
    pub work_unit: String,
    pub contract_start: String,
    pub contract_end: String,
}

/// Complete per-evaluation input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    #[serde(default)]
    pub identity: EmployeeIdentity,
    pub contract_type: ContractType,
    pub discipline: DisciplineRecord,
    /// Task-achievement (SKP) predicate.
    pub task_achievement: PerformancePredicate,
    pub integrity: IntegrityLevel,
    pub job_availability: JobAvailability,
    pub behavior: PerformancePredicate,
    pub qualification: QualificationRecord,
    /// Health requirement; when false the whole evaluation short-circuits.
    pub is_healthy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_deserializes_from_form_json() {
        let json = r#"{
            "identity": {
                "name": "Siti Rahma",
                "employee_number": "199003012024212001",
                "work_unit": "SDN 1 Semanding",
                "contract_start": "2024-03-01",
                "contract_end": "2025-02-28"
            },
            "contract_type": "one_year",
            "discipline": {
                "current": {
                    "absence_days": 2,
                    "short_hours": 10.0,
                    "absent_over_28_days": false,
                    "absent_10_consecutive": false
                }
            },
            "task_achievement": "good",
            "integrity": "none",
            "job_availability": "available",
            "behavior": "good",
            "qualification": {
                "education_matched": true,
                "training_hours": 25,
                "orientation_completed": true
            },
            "is_healthy": true
        }"#;

        let input: EvaluationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.contract_type, ContractType::OneYear);
        assert_eq!(input.discipline.current.absence_days, 2);
        assert_eq!(input.discipline.prior, None);
        assert_eq!(input.task_achievement, PerformancePredicate::Good);
        assert_eq!(input.integrity, IntegrityLevel::None);
    }

    #[test]
    fn identity_defaults_to_empty_text() {
        let json = r#"{
            "contract_type": "five_years",
            "discipline": { "current": {
                "absence_days": 0, "short_hours": 0.0,
                "absent_over_28_days": false, "absent_10_consecutive": false
            }},
            "task_achievement": "not_submitted",
            "integrity": "severe",
            "job_availability": "reduced_hours",
            "behavior": "very_poor",
            "qualification": {
                "education_matched": false,
                "training_hours": 0,
                "orientation_completed": false
            },
            "is_healthy": true
        }"#;

        let input: EvaluationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.identity, EmployeeIdentity::default());
        assert_eq!(input.job_availability, JobAvailability::ReducedHours);
    }
}
