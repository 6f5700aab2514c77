//! Web server module for the Chromatic webhook endpoint.
//!
//! One request in, at most one Teams POST out:
//! - Rejects anything but POST with 405
//! - Skips events that do not produce a card
//! - Delivers the card once and always answers `{"ok": true}`

pub mod handlers;

use axum::{
    routing::{any, get},
    Router,
};

pub use handlers::{chromatic_webhook, health, AppState, HealthResponse, WebhookResponse};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let webhook_path = state.config.webhook_path.clone();

    Router::new()
        .route("/health", get(health))
        .route(&webhook_path, any(chromatic_webhook))
        .with_state(state)
}
