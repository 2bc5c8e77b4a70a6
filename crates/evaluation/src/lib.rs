//! `kinerja-evaluation` — the performance-evaluation engine.
//!
//! Pure domain logic: maps a contract employee's evaluation record to a
//! score breakdown, a qualitative predicate, and a renewal recommendation.
//! Deterministic, synchronous, no I/O; recomputing on every form change is
//! the intended usage pattern.

pub mod category;
pub mod discipline;
pub mod engine;
pub mod input;
pub mod result;

pub use engine::evaluate;
pub use input::{
    ContractType, DisciplineRecord, EmployeeIdentity, EvaluationInput, IntegrityLevel,
    JobAvailability, PerformancePredicate, QualificationRecord, YearDiscipline,
};
pub use result::{EvaluationResult, Predicate, ScoreBreakdown};
