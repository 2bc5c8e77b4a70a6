use serde::Serialize;

use kinerja_core::EvaluationId;
use kinerja_evaluation::EvaluationResult;

// -------------------------
// Response DTOs
// -------------------------

/// Computed evaluation, tagged with a fresh id for logging/correlation.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: EvaluationId,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

impl EvaluationResponse {
    pub fn new(evaluation_id: EvaluationId, result: EvaluationResult) -> Self {
        Self {
            evaluation_id,
            result,
        }
    }
}
