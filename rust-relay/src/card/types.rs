//! Adaptive Card schema subset used by the relay.
//!
//! Serialized field names and `type` tags must match what the Teams
//! workflow endpoint expects byte for byte.

use serde::{Deserialize, Serialize};

pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_CARD_VERSION: &str = "1.2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Always `AdaptiveCard`
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub body: Vec<Block>,
}

impl AdaptiveCard {
    pub fn new(body: Vec<Block>) -> Self {
        Self {
            schema: ADAPTIVE_CARD_SCHEMA.to_string(),
            kind: "AdaptiveCard".to_string(),
            version: ADAPTIVE_CARD_VERSION.to_string(),
            body,
        }
    }

    /// Text of the header block.
    pub fn title(&self) -> Option<&str> {
        self.body.iter().find_map(|block| match block {
            Block::TextBlock { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn color(&self) -> Option<&str> {
        self.body.iter().find_map(|block| match block {
            Block::TextBlock { color, .. } => Some(color.as_str()),
            _ => None,
        })
    }

    pub fn facts(&self) -> &[Fact] {
        self.body
            .iter()
            .find_map(|block| match block {
                Block::FactSet { facts } => Some(facts.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Look up a fact value by its label.
    pub fn fact(&self, title: &str) -> Option<&str> {
        self.facts()
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.value.as_str())
    }

    pub fn actions(&self) -> &[Action] {
        self.body
            .iter()
            .find_map(|block| match block {
                Block::ActionSet { actions } => Some(actions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn primary_url(&self) -> Option<&str> {
        self.actions().first().map(|a| a.url.as_str())
    }
}

/// A top-level card element, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    TextBlock {
        text: String,
        weight: String,
        size: String,
        color: String,
    },
    FactSet {
        facts: Vec<Fact>,
    },
    ActionSet {
        actions: Vec<Action>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub title: String,
    pub url: String,
}

impl Action {
    pub fn open_url(title: &str, url: String) -> Self {
        Self {
            kind: ActionKind::OpenUrl,
            title: title.to_string(),
            url,
        }
    }
}
