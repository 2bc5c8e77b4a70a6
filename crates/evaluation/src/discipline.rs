//! Discipline scoring.
//!
//! The heaviest category (40% of the total). Each evaluated year is scored
//! independently from its absence-day tier and short-hour deficit; one-year
//! contracts use the current year as-is, five-year contracts blend the last
//! two years 60/40.

use kinerja_core::Score;

use crate::input::{ContractType, DisciplineRecord, YearDiscipline};

/// Short-hour deficit above which a year loses points.
///
/// 157.5 hours is one quarter of the annual required working hours.
const SHORT_HOURS_THRESHOLD: f64 = 157.5;
const SHORT_HOURS_PENALTY: f64 = 10.0;

/// Absence-day count at which a year scores zero outright.
const ZEROING_ABSENCE_DAYS: u32 = 28;

const CURRENT_YEAR_WEIGHT: f64 = 0.6;
const PRIOR_YEAR_WEIGHT: f64 = 0.4;

/// Absence-day tier table for one year.
///
/// Either fatal flag zeroes the year regardless of the day count.
fn absence_score(days: u32, zeroed: bool) -> f64 {
    if zeroed || days >= ZEROING_ABSENCE_DAYS {
        return 0.0;
    }
    match days {
        0 => 100.0,
        1..=2 => 80.0,
        3..=20 => 30.0,
        _ => 20.0,
    }
}

/// Score a single year: absence tier, then the short-hour penalty.
///
/// The penalty only applies to a nonzero base and never takes the year
/// below zero.
fn year_score(year: &YearDiscipline) -> f64 {
    let zeroed = year.absent_over_28_days || year.absent_10_consecutive;
    let base = absence_score(year.absence_days, zeroed);
    if base == 0.0 {
        return 0.0;
    }

    if year.short_hours > SHORT_HOURS_THRESHOLD {
        (base - SHORT_HOURS_PENALTY).max(0.0)
    } else {
        base
    }
}

/// Discipline sub-score for the whole record.
pub fn score(record: &DisciplineRecord, contract_type: ContractType) -> Score {
    match contract_type {
        ContractType::OneYear => Score::new(year_score(&record.current)),
        ContractType::FiveYears => {
            let prior = record.prior.unwrap_or_default();
            Score::new(
                year_score(&record.current) * CURRENT_YEAR_WEIGHT
                    + year_score(&prior) * PRIOR_YEAR_WEIGHT,
            )
        }
    }
}

fn year_fatal(year: &YearDiscipline) -> bool {
    (year.absence_days >= ZEROING_ABSENCE_DAYS || year.absent_over_28_days)
        && year.absent_10_consecutive
}

/// Severe-breach check, independent of the numeric score.
///
/// A year is fatal when the 28-day condition (count or flag) AND the
/// 10-consecutive flag hold together; either condition alone already zeroes
/// the year's score but does not force ineligibility. The prior year is only
/// consulted for five-year contracts.
pub fn fatal_violation(record: &DisciplineRecord, contract_type: ContractType) -> bool {
    if year_fatal(&record.current) {
        return true;
    }
    match contract_type {
        ContractType::OneYear => false,
        ContractType::FiveYears => record.prior.as_ref().is_some_and(year_fatal),
    }
}
