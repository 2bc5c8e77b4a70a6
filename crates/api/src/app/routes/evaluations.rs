use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use kinerja_core::EvaluationId;
use kinerja_evaluation::{evaluate, EvaluationInput};
use kinerja_export::render_report;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(compute_evaluation))
        .route("/export", post(export_evaluation))
}

/// Compute the score breakdown for one employee record.
pub async fn compute_evaluation(
    body: Result<Json<EvaluationInput>, JsonRejection>,
) -> axum::response::Response {
    let Json(input) = match body {
        Ok(v) => v,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            )
        }
    };

    let evaluation_id = EvaluationId::new();
    let result = evaluate(&input);

    tracing::info!(
        %evaluation_id,
        total = result.total.value(),
        predicate = %result.predicate,
        eligible = result.is_eligible,
        "evaluation computed"
    );

    Json(dto::EvaluationResponse::new(evaluation_id, result)).into_response()
}

/// Compute and render the downloadable report in one call.
///
/// The browser posts the same record as for `compute_evaluation` and
/// receives the document as an attachment.
pub async fn export_evaluation(
    body: Result<Json<EvaluationInput>, JsonRejection>,
) -> axum::response::Response {
    let Json(input) = match body {
        Ok(v) => v,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            )
        }
    };

    let evaluation_id = EvaluationId::new();
    let result = evaluate(&input);
    let report = render_report(
        &input.identity,
        input.contract_type,
        &result,
        Utc::now().date_naive(),
    );

    tracing::info!(
        %evaluation_id,
        file_name = %report.file_name,
        "evaluation report exported"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.file_name),
            ),
        ],
        report.bytes,
    )
        .into_response()
}
