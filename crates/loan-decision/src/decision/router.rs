use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use super::domain::{Decision, DecisionError, LoanRequest};
use super::identifier::IdentifierValidator;
use super::DecisionEngine;

/// Router exposing the loan decision endpoint.
pub fn decision_router<V>(engine: Arc<DecisionEngine<V>>) -> Router
where
    V: IdentifierValidator + 'static,
{
    Router::new()
        .route("/api/loan-decision", post(decision_handler::<V>))
        .with_state(engine)
}

/// HTTP status for a failed decision: caller mistakes and ineligibility are bad requests, an
/// exhausted search is not found.
pub fn status_for(error: &DecisionError) -> StatusCode {
    match error {
        DecisionError::NoValidLoan { .. } => StatusCode::NOT_FOUND,
        DecisionError::InvalidIdentifier(_)
        | DecisionError::InvalidAmount(_)
        | DecisionError::InvalidPeriod { .. }
        | DecisionError::Underage { .. }
        | DecisionError::OverAge { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Renders a failure as the decision payload clients already parse.
pub fn decline_response(error: &DecisionError) -> Response {
    (status_for(error), Json(Decision::declined(error.to_string()))).into_response()
}

pub(crate) async fn decision_handler<V>(
    State(engine): State<Arc<DecisionEngine<V>>>,
    Json(request): Json<LoanRequest>,
) -> Response
where
    V: IdentifierValidator + 'static,
{
    match engine.decide(&request) {
        Ok(decision) => (StatusCode::OK, Json(decision)).into_response(),
        Err(error) => {
            debug!(%error, "loan request declined");
            decline_response(&error)
        }
    }
}
