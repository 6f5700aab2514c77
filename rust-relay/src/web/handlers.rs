//! Webhook endpoint handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::card::build_card;
use crate::delivery::CardSink;
use crate::payload::ChromaticPayload;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sink: Arc<dyn CardSink>,
}

impl AppState {
    pub fn new(config: Config, sink: Arc<dyn CardSink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Chromatic Webhook
// =============================================================================

/// Webhook response: exactly one of `ok` or `skipped` is set.
#[derive(Debug, PartialEq, Serialize)]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl WebhookResponse {
    pub fn ok() -> Self {
        Self {
            ok: Some(true),
            skipped: None,
        }
    }

    pub fn skipped() -> Self {
        Self {
            ok: None,
            skipped: Some(true),
        }
    }
}

/// Chromatic webhook endpoint.
///
/// Mounted for every method so non-POST requests get a logged 405 instead
/// of the router's default rejection. Bodies that are not a recognised
/// payload are skipped, not rejected.
pub async fn chromatic_webhook(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        info!(method = %method, "method_not_allowed");
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let event = value
        .get("event")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let card = match serde_json::from_value::<ChromaticPayload>(value) {
        Ok(payload) => build_card(&payload),
        Err(e) => {
            warn!(event = %event, error = %e, body_length = body.len(), "chromatic_payload_invalid");
            None
        }
    };

    let Some(card) = card else {
        info!(event = %event, "chromatic_event_skipped");
        return (StatusCode::OK, Json(WebhookResponse::skipped())).into_response();
    };

    info!(
        event = %event,
        title = card.title().unwrap_or_default(),
        facts = card.facts().len(),
        "chromatic_card_built"
    );

    // Best effort: a failed delivery is logged and never retried
    if let Err(e) = state.sink.deliver(&card).await {
        error!(event = %event, sink = state.sink.name(), error = %e, "teams_delivery_failed");
    }

    (StatusCode::OK, Json(WebhookResponse::ok())).into_response()
}
