//! Chromatic → Microsoft Teams notification relay.
//!
//! Receives Chromatic webhooks, turns build and review events into
//! Adaptive Cards, and posts them to a Teams incoming webhook.
//!
//! ## Architecture
//!
//! ```text
//! Chromatic → POST /api/chromatic → build_card() → CardSink → Teams
//! ```
//!
//! Nothing is persisted or queued. Each request produces at most one
//! outbound POST, and delivery failures are only logged.

pub mod card;
pub mod config;
pub mod delivery;
pub mod payload;
pub mod web;

// Re-export commonly used types
pub use card::{build_card, AdaptiveCard, Notification};
pub use config::Config;
pub use delivery::{CardSink, DeliveryError, TeamsWebhook};
pub use payload::ChromaticPayload;
pub use web::{router, AppState};
