//! Checkout quote endpoint.
//!
//! - `POST /api/v1/quote` — price a service request and return the full
//!   quote. Quotes flagged for manual review are logged so operators can
//!   route the booking to a specialist instead of automatic checkout; the
//!   response still carries the complete result either way.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bincare_core::{DeterministicQuotingEngine, QuoteParams, QuoteRequest, QuoteResult, QuotingEngine};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct CheckoutState {
    engine: Arc<DeterministicQuotingEngine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutError {
    pub error: String,
    pub correlation_id: String,
}

pub fn router(engine: Arc<DeterministicQuotingEngine>) -> Router {
    Router::new().route("/api/v1/quote", post(quote)).with_state(CheckoutState { engine })
}

pub async fn quote(
    State(state): State<CheckoutState>,
    payload: Result<Json<QuoteParams>, JsonRejection>,
) -> Result<Json<QuoteResult>, (StatusCode, Json<CheckoutError>)> {
    let correlation_id = Uuid::new_v4().to_string();

    let Json(params) = payload.map_err(|rejection| {
        warn!(
            event_name = "checkout.quote.rejected",
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "quote request body rejected"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(CheckoutError {
                error: rejection.body_text(),
                correlation_id: correlation_id.clone(),
            }),
        )
    })?;

    let request = QuoteRequest::from(params);
    let result = state.engine.quote(&request);

    if result.requires_manual_review {
        info!(
            event_name = "checkout.quote.manual_review",
            correlation_id = %correlation_id,
            final_price = %result.final_price,
            reasons = ?result.review_reasons,
            "quote flagged for specialist review instead of automatic checkout"
        );
    } else {
        info!(
            event_name = "checkout.quote.priced",
            correlation_id = %correlation_id,
            final_price = %result.final_price,
            "quote priced for automatic checkout"
        );
    }

    Ok(Json(result))
}
