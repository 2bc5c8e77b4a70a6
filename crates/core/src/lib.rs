//! `kinerja-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod score;

pub use error::{DomainError, DomainResult};
pub use id::EvaluationId;
pub use score::Score;
