//! Teams incoming-webhook sink.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::{CardSink, DeliveryError};
use crate::card::AdaptiveCard;

/// Posts cards as JSON to a Teams workflow/incoming webhook URL.
#[derive(Clone)]
pub struct TeamsWebhook {
    client: Client,
    url: Option<String>,
    timeout: Duration,
}

impl TeamsWebhook {
    /// Create a sink. A missing URL is reported on each delivery attempt.
    pub fn new(client: Client, url: Option<String>, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl CardSink for TeamsWebhook {
    async fn deliver(&self, card: &AdaptiveCard) -> Result<(), DeliveryError> {
        let url = self.url.as_deref().ok_or(DeliveryError::MissingWebhookUrl)?;

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(card)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                status: status.as_u16(),
            });
        }

        info!(
            status_code = status.as_u16(),
            title = card.title().unwrap_or_default(),
            "teams_card_delivered"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "teams"
    }
}
