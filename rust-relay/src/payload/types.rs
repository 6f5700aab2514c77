//! Chromatic webhook payload types.
//!
//! Field names follow Chromatic's camelCase wire format. Every leaf is
//! optional: Chromatic has added and dropped fields between payload versions,
//! and a missing field must drop a fact from the card rather than reject the
//! whole event.

use serde::Deserialize;

/// `event` value for build status changes.
pub const EVENT_BUILD: &str = "build";

/// `event` value for review (pull request) updates.
pub const EVENT_REVIEW: &str = "review";

/// `event` value for review approvals and rejections.
pub const EVENT_REVIEW_DECISION: &str = "review-decision";

/// Build result reported once a build finished without errors.
pub const RESULT_SUCCESS: &str = "SUCCESS";

/// Decision status of an approved review.
pub const DECISION_APPROVED: &str = "APPROVED";

/// A Chromatic webhook payload, tagged by its `event` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event")]
pub enum ChromaticPayload {
    #[serde(rename = "build")]
    Build(BuildUpdate),
    #[serde(rename = "review")]
    Review(ReviewUpdate),
    #[serde(rename = "review-decision")]
    ReviewDecision(ReviewDecisionUpdate),
    /// Any event this relay does not forward
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Build Updates
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildUpdate {
    /// Payload schema version
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub build: Option<Build>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub committer_name: Option<String>,
    /// e.g. `PASSED`, `PENDING`, `ACCEPTED`, `DENIED`
    #[serde(default)]
    pub status: Option<String>,
    /// e.g. `SUCCESS`, `TIMEOUT`, `CAPTURE_ERROR`, `SYSTEM_ERROR`
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub storybook_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub change_count: Option<u64>,
    #[serde(default)]
    pub component_count: Option<u64>,
    #[serde(default)]
    pub spec_count: Option<u64>,
    #[serde(default)]
    pub project: Option<Project>,
}

impl Build {
    /// Whether the build finished with the success result.
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(RESULT_SUCCESS)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

// =============================================================================
// Review Updates
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewUpdate {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub review: Option<Review>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    /// e.g. `OPEN`, `MERGED`, `CLOSED`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub base_ref_name: Option<String>,
    #[serde(default)]
    pub head_ref_name: Option<String>,
    #[serde(default)]
    pub is_cross_repository: Option<bool>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub author: Option<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

// =============================================================================
// Review Decisions
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecisionUpdate {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub review_decision: Option<ReviewDecision>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewDecision {
    /// `APPROVED` or a rejection such as `CHANGES_REQUESTED`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub review: Option<Review>,
    #[serde(default)]
    pub reviewer: Option<Person>,
}

impl ReviewDecision {
    pub fn is_approved(&self) -> bool {
        self.status.as_deref() == Some(DECISION_APPROVED)
    }
}
