//! HTTP API application wiring (Axum router).
//!
//! Structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Router};

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The service is stateless: every request carries the complete input
/// record and nothing is persisted between requests.
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/evaluations", routes::evaluations::router())
}
