use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use bincare_core::{DeterministicQuotingEngine, Frequency};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    engine: Arc<DeterministicQuotingEngine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub rates: HealthCheck,
    pub checked_at: String,
}

pub fn router(engine: Arc<DeterministicQuotingEngine>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let rates = rate_book_check(&state.engine);
    let ready = rates.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "bincare-server runtime initialized".to_string(),
        },
        rates,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

// Spot-check the loaded rate book; the monthly multiplier is the identity by
// definition, so anything else means the book is corrupt.
fn rate_book_check(engine: &DeterministicQuotingEngine) -> HealthCheck {
    if engine.rates().multiplier(Frequency::Monthly) == Decimal::ONE {
        HealthCheck { status: "ready", detail: "rate book loaded".to_string() }
    } else {
        HealthCheck {
            status: "degraded",
            detail: "rate book monthly multiplier is not identity".to_string(),
        }
    }
}
