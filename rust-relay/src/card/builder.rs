//! Maps Chromatic events to notifications.
//!
//! Returns `None` for anything that should not reach Teams: unknown events
//! and builds that did not finish with the success result.

use tracing::debug;

use super::{AdaptiveCard, Notification};
use crate::payload::{BuildUpdate, ChromaticPayload, Review, ReviewDecisionUpdate, ReviewUpdate};

const BUILD_COLOR: &str = "439FE0";
const REVIEW_COLOR: &str = "E01E5A";
const APPROVED_COLOR: &str = "2EB886";
const REJECTED_COLOR: &str = "E01E5A";

/// Build the Teams card for a payload, if it warrants one.
pub fn build_card(payload: &ChromaticPayload) -> Option<AdaptiveCard> {
    let notification = match payload {
        ChromaticPayload::Build(update) => build_update(update)?,
        ChromaticPayload::Review(update) => review_update(update),
        ChromaticPayload::ReviewDecision(update) => review_decision(update),
        ChromaticPayload::Unknown => return None,
    };

    Some(notification.into_card())
}

fn build_update(update: &BuildUpdate) -> Option<Notification> {
    let build = update.build.as_ref()?;
    if !build.is_success() {
        debug!(
            build_number = ?build.number,
            result = ?build.result,
            "build_not_successful"
        );
        return None;
    }

    let project = build.project.as_ref();

    Some(Notification {
        title: "🚀 Chromatic Build Updates".to_string(),
        color: BUILD_COLOR,
        facts: vec![
            ("Build", build.number.map(|n| format!("#{}", n))),
            ("Status", build.status.clone()),
            ("Result", build.result.clone()),
            ("Project", project.and_then(|p| p.name.clone())),
            ("Storybook URL", build.storybook_url.clone()),
            ("Web URL", project.and_then(|p| p.web_url.clone())),
            ("Account Name", project.and_then(|p| p.account_name.clone())),
            ("Changes", build.change_count.map(|n| n.to_string())),
            ("Components", build.component_count.map(|n| n.to_string())),
            ("Specs", build.spec_count.map(|n| n.to_string())),
        ],
        url: build.web_url.clone(),
        secondary_url: build.storybook_url.clone(),
    })
}

fn review_update(update: &ReviewUpdate) -> Notification {
    let review = update.review.clone().unwrap_or_default();

    Notification {
        title: "👀 Review Updates".to_string(),
        color: REVIEW_COLOR,
        facts: review_facts(&review),
        url: review.web_url,
        secondary_url: None,
    }
}

fn review_decision(update: &ReviewDecisionUpdate) -> Notification {
    let decision = update.review_decision.clone().unwrap_or_default();
    let review = decision.review.clone().unwrap_or_default();
    let passed = decision.is_approved();
    let (color, emoji) = if passed {
        (APPROVED_COLOR, "✅")
    } else {
        (REJECTED_COLOR, "❌")
    };

    let mut facts = review_facts(&review);
    facts.push((
        "Reviewer Username",
        decision.reviewer.as_ref().and_then(|r| r.username.clone()),
    ));

    Notification {
        title: format!(
            "{} Review Decision {}",
            emoji,
            decision.status.as_deref().unwrap_or("UNKNOWN")
        ),
        color,
        facts,
        url: review.web_url,
        secondary_url: None,
    }
}

/// Facts shared by review updates and review decisions.
fn review_facts(review: &Review) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Review", review.number.map(|n| format!("#{}", n))),
        ("Title", review.title.clone()),
        ("Status", review.status.clone()),
        ("Base Ref", review.base_ref_name.clone()),
        ("Head Ref", review.head_ref_name.clone()),
        (
            "Is Cross Repository",
            review.is_cross_repository.map(yes_no),
        ),
        (
            "Author Username",
            review.author.as_ref().and_then(|a| a.username.clone()),
        ),
    ]
}

fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload(value: Value) -> ChromaticPayload {
        serde_json::from_value(value).unwrap()
    }

    fn success_build() -> Value {
        json!({
            "version": 2,
            "event": "build",
            "build": {
                "number": 128,
                "branch": "main",
                "commit": "9f2c1e0",
                "committerName": "Jo Doe",
                "status": "PASSED",
                "result": "SUCCESS",
                "storybookUrl": "https://main--abc123.chromatic.com",
                "webUrl": "https://www.chromatic.com/build?appId=abc123&number=128",
                "changeCount": 4,
                "componentCount": 52,
                "specCount": 310,
                "project": {
                    "name": "design-system",
                    "accountName": "acme",
                    "accountAvatarUrl": "https://avatars.example.com/acme.png",
                    "webUrl": "https://www.chromatic.com/builds?appId=abc123"
                }
            }
        })
    }

    fn review(number: u64) -> Value {
        json!({
            "number": number,
            "title": "Refresh button styles",
            "status": "OPEN",
            "baseRefName": "main",
            "headRefName": "feature/buttons",
            "isCrossRepository": false,
            "webUrl": format!("https://www.chromatic.com/review?appId=abc123&number={}", number),
            "author": { "name": "Jo Doe", "username": "jodoe", "avatarUrl": "https://a/jo.png" }
        })
    }

    fn decision(status: &str) -> Value {
        json!({
            "event": "review-decision",
            "reviewDecision": {
                "status": status,
                "project": { "name": "design-system" },
                "review": review(9),
                "reviewer": { "name": "Sam Roe", "username": "samroe" }
            }
        })
    }

    #[test]
    fn test_successful_build_card() {
        let card = build_card(&payload(success_build())).unwrap();

        assert_eq!(card.title(), Some("🚀 Chromatic Build Updates"));
        assert_eq!(card.color(), Some(BUILD_COLOR));
        assert_eq!(
            card.primary_url(),
            Some("https://www.chromatic.com/build?appId=abc123&number=128")
        );

        let titles: Vec<&str> = card.facts().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Build",
                "Status",
                "Result",
                "Project",
                "Storybook URL",
                "Web URL",
                "Account Name",
                "Changes",
                "Components",
                "Specs",
            ]
        );
        assert_eq!(card.fact("Build"), Some("#128"));
        assert_eq!(card.fact("Specs"), Some("310"));
        assert_eq!(card.actions()[1].url, "https://main--abc123.chromatic.com");
    }

    #[test]
    fn test_non_success_builds_are_skipped() {
        for result in ["TIMEOUT", "CAPTURE_ERROR", "SYSTEM_ERROR", "success", ""] {
            let mut value = success_build();
            value["build"]["result"] = json!(result);
            assert!(build_card(&payload(value)).is_none(), "result {}", result);
        }

        let mut value = success_build();
        value["build"].as_object_mut().unwrap().remove("result");
        assert!(build_card(&payload(value)).is_none());

        assert!(build_card(&payload(json!({ "event": "build" }))).is_none());
    }

    #[test]
    fn test_build_card_omits_missing_fields() {
        let card = build_card(&payload(json!({
            "event": "build",
            "build": {
                "number": 3,
                "result": "SUCCESS",
                "webUrl": "https://www.chromatic.com/build?number=3"
            }
        })))
        .unwrap();

        let titles: Vec<&str> = card.facts().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Build", "Result"]);
        assert_eq!(card.actions().len(), 1);
    }

    #[test]
    fn test_review_update_card() {
        let card = build_card(&payload(json!({ "event": "review", "review": review(17) }))).unwrap();

        assert_eq!(card.title(), Some("👀 Review Updates"));
        assert_eq!(card.color(), Some(REVIEW_COLOR));
        assert_eq!(card.fact("Review"), Some("#17"));
        assert_eq!(card.fact("Is Cross Repository"), Some("No"));
        assert_eq!(card.fact("Author Username"), Some("jodoe"));
        assert_eq!(
            card.primary_url(),
            Some("https://www.chromatic.com/review?appId=abc123&number=17")
        );
    }

    #[test]
    fn test_review_update_ignores_status() {
        for status in ["OPEN", "MERGED", "CLOSED"] {
            let mut r = review(1);
            r["status"] = json!(status);
            let card = build_card(&payload(json!({ "event": "review", "review": r }))).unwrap();
            assert_eq!(card.fact("Status"), Some(status));
        }

        let card = build_card(&payload(json!({ "event": "review" }))).unwrap();
        assert!(card.facts().is_empty());
        assert!(card.actions().is_empty());
    }

    #[test]
    fn test_cross_repository_yes() {
        let mut r = review(2);
        r["isCrossRepository"] = json!(true);
        let card = build_card(&payload(json!({ "event": "review", "review": r }))).unwrap();
        assert_eq!(card.fact("Is Cross Repository"), Some("Yes"));
    }

    #[test]
    fn test_approved_decision_polarity() {
        let card = build_card(&payload(decision("APPROVED"))).unwrap();
        assert_eq!(card.title(), Some("✅ Review Decision APPROVED"));
        assert_eq!(card.color(), Some(APPROVED_COLOR));
        assert_eq!(card.fact("Review"), Some("#9"));
        assert_eq!(card.fact("Reviewer Username"), Some("samroe"));
    }

    #[test]
    fn test_rejected_decision_polarity() {
        for status in ["CHANGES_REQUESTED", "REJECTED", "approved"] {
            let card = build_card(&payload(decision(status))).unwrap();
            assert_eq!(
                card.title().unwrap(),
                format!("❌ Review Decision {}", status)
            );
            assert_eq!(card.color(), Some(REJECTED_COLOR));
        }
    }

    #[test]
    fn test_decision_without_status() {
        let card = build_card(&payload(json!({ "event": "review-decision" }))).unwrap();
        assert_eq!(card.title(), Some("❌ Review Decision UNKNOWN"));
        assert!(card.facts().is_empty());
    }

    #[test]
    fn test_null_nested_objects_still_build_cards() {
        let card = build_card(&payload(json!({ "event": "review", "review": null }))).unwrap();
        assert_eq!(card.title(), Some("👀 Review Updates"));
        assert!(card.facts().is_empty());

        let card = build_card(&payload(json!({
            "event": "review-decision",
            "reviewDecision": null
        })))
        .unwrap();
        assert_eq!(card.title(), Some("❌ Review Decision UNKNOWN"));

        let card = build_card(&payload(json!({
            "event": "review-decision",
            "reviewDecision": {
                "status": "APPROVED",
                "review": null,
                "reviewer": { "username": "samroe" }
            }
        })))
        .unwrap();
        assert_eq!(card.title(), Some("✅ Review Decision APPROVED"));
        assert_eq!(card.color(), Some(APPROVED_COLOR));
        assert_eq!(card.facts().len(), 1);
        assert!(card.actions().is_empty());
    }

    #[test]
    fn test_fact_count_matches_defined_fields() {
        let card = build_card(&payload(json!({
            "event": "review",
            "review": { "number": 5, "title": "Tokens", "headRefName": "tokens" }
        })))
        .unwrap();
        assert_eq!(card.facts().len(), 3);
    }

    #[test]
    fn test_unknown_event_yields_no_card() {
        assert!(build_card(&ChromaticPayload::Unknown).is_none());
        assert!(build_card(&payload(json!({ "event": "deployment" }))).is_none());
    }
}
