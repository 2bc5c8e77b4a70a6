//! `kinerja-export` — evaluation report exporter.
//!
//! Formatting only: the exporter consumes an already-computed
//! [`kinerja_evaluation::EvaluationResult`] plus the identity fields and
//! produces a downloadable document. It performs no scoring of its own.

pub mod report;

pub use report::{render_report, RenderedReport};
