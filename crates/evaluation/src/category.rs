//! Category lookup tables.
//!
//! Four of the six evaluation categories are direct lookups from an
//! enumerated assessment to a fixed score; qualification is a small weighted
//! composite of three such lookups. All tables come from the BKPSDM scoring
//! instruction and are not configurable.

use kinerja_core::Score;

use crate::input::{IntegrityLevel, JobAvailability, PerformancePredicate, QualificationRecord};

/// Internal weights of the qualification composite.
const EDUCATION_WEIGHT: f64 = 0.4;
const TRAINING_WEIGHT: f64 = 0.4;
const ORIENTATION_WEIGHT: f64 = 0.2;

/// Task-achievement (SKP) predicate table.
pub fn task_achievement_score(predicate: PerformancePredicate) -> Score {
    let value = match predicate {
        PerformancePredicate::Excellent => 100.0,
        PerformancePredicate::Good => 80.0,
        PerformancePredicate::NeedsImprovement => 60.0,
        PerformancePredicate::Poor => 50.0,
        PerformancePredicate::VeryPoor => 10.0,
        PerformancePredicate::NotSubmitted => 0.0,
    };
    Score::new(value)
}

/// Work-behavior predicate table.
///
/// Same scale as task-achievement but a different spread; an unfiled
/// assessment still scores zero.
pub fn behavior_score(predicate: PerformancePredicate) -> Score {
    let value = match predicate {
        PerformancePredicate::Excellent => 100.0,
        PerformancePredicate::Good => 80.0,
        PerformancePredicate::NeedsImprovement => 60.0,
        PerformancePredicate::Poor => 40.0,
        PerformancePredicate::VeryPoor => 20.0,
        PerformancePredicate::NotSubmitted => 0.0,
    };
    Score::new(value)
}

/// Integrity-violation severity table.
pub fn integrity_score(level: IntegrityLevel) -> Score {
    let value = match level {
        IntegrityLevel::None => 100.0,
        IntegrityLevel::Minor => 80.0,
        IntegrityLevel::Moderate => 60.0,
        IntegrityLevel::Severe => 10.0,
    };
    Score::new(value)
}

/// Job availability is binary; reduced hours counts as unavailable.
pub fn job_availability_score(availability: JobAvailability) -> Score {
    match availability {
        JobAvailability::Available => Score::MAX,
        JobAvailability::NotAvailable | JobAvailability::ReducedHours => Score::MIN,
    }
}

/// Training-hour (JP) tier table.
pub fn training_hours_score(hours: u32) -> Score {
    let value = match hours {
        21.. => 100.0,
        11..=20 => 80.0,
        6..=10 => 60.0,
        1..=5 => 50.0,
        0 => 0.0,
    };
    Score::new(value)
}

/// Qualification composite: education match 40%, training tier 40%,
/// orientation completion 20%.
pub fn qualification_score(qualification: &QualificationRecord) -> Score {
    let education = if qualification.education_matched { 100.0 } else { 0.0 };
    let training = training_hours_score(qualification.training_hours).value();
    let orientation = if qualification.orientation_completed { 100.0 } else { 0.0 };

    Score::new(
        education * EDUCATION_WEIGHT + training * TRAINING_WEIGHT + orientation * ORIENTATION_WEIGHT,
    )
}
