//! Outbound delivery of cards to Teams.
//!
//! The web handler only sees [`CardSink`], so tests can swap the HTTP
//! transport for an in-memory fake.

pub mod teams;

use async_trait::async_trait;
use thiserror::Error;

use crate::card::AdaptiveCard;

pub use teams::TeamsWebhook;

/// Errors raised while delivering a card.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Teams webhook URL is not configured")]
    MissingWebhookUrl,

    #[error("Failed to send card: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Teams webhook responded with status {status}")]
    Status { status: u16 },
}

/// Destination for rendered cards.
#[async_trait]
pub trait CardSink: Send + Sync {
    /// Deliver one card. Called at most once per inbound request, never retried.
    async fn deliver(&self, card: &AdaptiveCard) -> Result<(), DeliveryError>;

    /// Sink identifier for logging
    fn name(&self) -> &'static str;
}
