//! Route registration for the calculator API.

use axum::routing::{get, post};
use axum::Router;

use crate::api::web;

use super::handlers;

/// Build the full application router: JSON API plus the HTML form page.
///
/// The router is stateless; every handler calls straight into the
/// arithmetic core.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/", get(web::form_page).post(web::submit_form))
        .route("/calculate", post(handlers::calculate))
        .route("/api/operations", get(handlers::operations))
        .route("/api/openapi.json", get(handlers::openapi_document))
        .route("/health", get(handlers::health))
}
