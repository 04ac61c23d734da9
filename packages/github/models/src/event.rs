use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::kind::EventKind;

const UNKNOWN_REPO: &str = "unknown";

/// One record from `GET /users/{username}/events`.
///
/// Only the top-level shape is checked at decode time. A field that is
/// missing, null, or of the wrong JSON type decodes to its default, so one
/// odd event cannot fail the whole listing; the accessors below supply
/// display defaults instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "lenient")]
    pub repo: Option<EventRepo>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRepo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// Decodes `T` from whatever JSON is present, falling back to
/// `T::default()` when the value has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl ActivityEvent {
    #[must_use]
    pub fn repo_name(&self) -> &str {
        self.repo
            .as_ref()
            .map(|repo| repo.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_REPO)
    }

    /// Looks up a payload value by JSON pointer, e.g. `/release/tag_name`.
    #[must_use]
    pub fn payload_value(&self, pointer: &str) -> Option<&Value> {
        self.payload.pointer(pointer).filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn payload_str(&self, pointer: &str) -> Option<&str> {
        self.payload_value(pointer)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn payload_u64(&self, pointer: &str) -> Option<u64> {
        self.payload_value(pointer).and_then(Value::as_u64)
    }

    #[must_use]
    pub fn payload_bool(&self, pointer: &str) -> Option<bool> {
        self.payload_value(pointer).and_then(Value::as_bool)
    }

    #[must_use]
    pub fn payload_array_len(&self, pointer: &str) -> Option<usize> {
        self.payload_value(pointer)
            .and_then(Value::as_array)
            .map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_push_event() {
        let json = r#"{
            "id": "34567890123",
            "type": "PushEvent",
            "actor": { "id": 4921183, "login": "kamranahmedse" },
            "repo": { "id": 139, "name": "kamranahmedse/developer-roadmap" },
            "payload": { "size": 3, "commits": [{}, {}, {}] },
            "public": true,
            "created_at": "2024-01-15T14:30:00Z"
        }"#;

        let event: ActivityEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.kind, EventKind::Push);
        assert_eq!(event.repo_name(), "kamranahmedse/developer-roadmap");
        assert_eq!(event.created_at.as_deref(), Some("2024-01-15T14:30:00Z"));
        assert_eq!(event.payload_array_len("/commits"), Some(3));
        assert_eq!(event.payload_u64("/size"), Some(3));
    }

    #[test]
    fn test_parse_event_with_missing_fields() {
        let event: ActivityEvent = serde_json::from_str("{}").unwrap();

        assert_eq!(event.kind, EventKind::Other(String::new()));
        assert_eq!(event.repo_name(), "unknown");
        assert!(event.created_at.is_none());
        assert!(event.payload_str("/action").is_none());
    }

    #[test]
    fn test_parse_event_with_null_payload() {
        let event: ActivityEvent =
            serde_json::from_str(r#"{"type": "WatchEvent", "payload": null}"#).unwrap();

        assert_eq!(event.kind, EventKind::Watch);
        assert!(event.payload_str("/action").is_none());
    }

    #[test]
    fn test_repo_without_name_falls_back() {
        let event: ActivityEvent =
            serde_json::from_str(r#"{"type": "ForkEvent", "repo": {"id": 1}}"#).unwrap();

        assert_eq!(event.repo_name(), "unknown");
    }

    #[test]
    fn test_wrong_field_types_decode_to_defaults() {
        let event: ActivityEvent = serde_json::from_str(
            r#"{"type": null, "repo": {"name": null}, "created_at": 1705329000}"#,
        )
        .unwrap();

        assert_eq!(event.kind, EventKind::Other(String::new()));
        assert_eq!(event.repo_name(), "unknown");
        assert!(event.created_at.is_none());
    }

    #[test]
    fn test_repo_of_wrong_type_falls_back() {
        let event: ActivityEvent =
            serde_json::from_str(r#"{"type": "ForkEvent", "repo": "b/x"}"#).unwrap();

        assert_eq!(event.kind, EventKind::Fork);
        assert!(event.repo.is_none());
        assert_eq!(event.repo_name(), "unknown");
    }

    #[test]
    fn test_non_string_type_tag_is_unknown() {
        let event: ActivityEvent =
            serde_json::from_str(r#"{"type": 42, "repo": {"name": "a/b"}}"#).unwrap();

        assert_eq!(event.kind, EventKind::Other(String::new()));
        assert_eq!(event.repo_name(), "a/b");
    }

    #[test]
    fn test_nested_payload_lookup() {
        let event: ActivityEvent = serde_json::from_str(
            r#"{
                "type": "PullRequestEvent",
                "payload": {
                    "action": "closed",
                    "pull_request": { "merged": true },
                    "release": { "tag_name": "" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(event.payload_str("/action"), Some("closed"));
        assert_eq!(event.payload_bool("/pull_request/merged"), Some(true));
        assert!(event.payload_str("/release/tag_name").is_none());
    }

    #[test]
    fn test_parse_event_list_preserves_order() {
        let json = r#"[
            {"type": "WatchEvent", "repo": {"name": "a/first"}},
            {"type": "ForkEvent", "repo": {"name": "b/second"}},
            {"type": "WatchEvent", "repo": {"name": "a/first"}}
        ]"#;

        let events: Vec<ActivityEvent> = serde_json::from_str(json).unwrap();
        let repos: Vec<&str> = events.iter().map(ActivityEvent::repo_name).collect();

        assert_eq!(repos, vec!["a/first", "b/second", "a/first"]);
    }
}
