//! Adaptive Card documents posted to Teams.
//!
//! ## Flow
//!
//! ```text
//! ChromaticPayload → build_card() → Notification → into_card() → AdaptiveCard
//! ```
//!
//! [`Notification`] knows nothing about Chromatic; it only renders a title,
//! an accent color, facts and links into the fixed three-block layout.

pub mod builder;
pub mod types;

pub use builder::build_card;
pub use types::{Action, ActionKind, AdaptiveCard, Block, Fact};

/// Label of the primary card action.
pub const PRIMARY_ACTION_TITLE: &str = "View in Chromatic";

/// Label of the secondary card action.
pub const SECONDARY_ACTION_TITLE: &str = "View Storybook";

/// Presentation-level notification, before rendering.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    /// Hex accent color without the leading `#`
    pub color: &'static str,
    /// Ordered facts; `None` values are dropped when rendering
    pub facts: Vec<(&'static str, Option<String>)>,
    pub url: Option<String>,
    pub secondary_url: Option<String>,
}

impl Notification {
    /// Render into the three-block Adaptive Card layout.
    pub fn into_card(self) -> AdaptiveCard {
        let facts = self
            .facts
            .into_iter()
            .filter_map(|(title, value)| {
                value.map(|value| Fact {
                    title: title.to_string(),
                    value,
                })
            })
            .collect();

        let actions = [
            (PRIMARY_ACTION_TITLE, self.url),
            (SECONDARY_ACTION_TITLE, self.secondary_url),
        ]
        .into_iter()
        .filter_map(|(title, url)| url.map(|url| Action::open_url(title, url)))
        .collect();

        AdaptiveCard::new(vec![
            Block::TextBlock {
                text: self.title,
                weight: "bolder".to_string(),
                size: "large".to_string(),
                color: self.color.to_string(),
            },
            Block::FactSet { facts },
            Block::ActionSet { actions },
        ])
    }
}
