//! Inbound Chromatic webhook payloads.
//!
//! Chromatic posts one JSON object per event, discriminated by its `event`
//! field. Only three event kinds are modelled; everything else deserializes
//! to [`ChromaticPayload::Unknown`] and is ignored downstream.

pub mod types;

pub use types::{
    Build, BuildUpdate, ChromaticPayload, Person, Project, Review, ReviewDecision,
    ReviewDecisionUpdate, ReviewUpdate, DECISION_APPROVED, EVENT_BUILD, EVENT_REVIEW,
    EVENT_REVIEW_DECISION, RESULT_SUCCESS,
};
