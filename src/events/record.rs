//! Raw activity records as returned by the events API.

use serde_json::Value;

/// Placeholder for a missing string field.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a record without a `type` tag.
pub const NO_TYPE: &str = "No type";

/// One entry of a user's public activity feed.
///
/// The record is kept as the raw JSON value. Accessors never fail: a field
/// that is missing or has the wrong JSON type yields a sentinel instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord(Value);

impl ActivityRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `type` tag, or [`NO_TYPE`].
    pub fn type_tag(&self) -> &str {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(NO_TYPE)
    }

    /// `actor.login`, or [`UNKNOWN`].
    pub fn actor_login(&self) -> &str {
        self.nested_str("actor", "login").unwrap_or(UNKNOWN)
    }

    /// `repo.name`, or [`UNKNOWN`].
    pub fn repo_name(&self) -> &str {
        self.nested_str("repo", "name").unwrap_or(UNKNOWN)
    }

    /// `org.login`, or [`UNKNOWN`]. Most personal events carry no org.
    pub fn org_login(&self) -> &str {
        self.nested_str("org", "login").unwrap_or(UNKNOWN)
    }

    /// The top-level `public` flag; absent means private.
    pub fn is_public(&self) -> bool {
        self.0.get("public").and_then(Value::as_bool).unwrap_or(false)
    }

    /// A string field under `payload`, if present.
    pub fn payload_str(&self, field: &str) -> Option<&str> {
        self.nested_str("payload", field)
    }

    fn nested_str(&self, object: &str, field: &str) -> Option<&str> {
        self.0.get(object)?.get(field)?.as_str()
    }
}

impl From<Value> for ActivityRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Decode a response body into records.
///
/// Anything other than a JSON array decodes to an empty list.
pub fn records_from_json(body: Value) -> Vec<ActivityRecord> {
    match body {
        Value::Array(items) => items.into_iter().map(ActivityRecord::from).collect(),
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "Events payload is not an array, treating as empty"
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_read_nested_fields() {
        let record = ActivityRecord::new(json!({
            "type": "CreateEvent",
            "actor": { "login": "octocat" },
            "repo": { "name": "octocat/hello" },
            "org": { "login": "github" },
            "public": true,
            "payload": { "master_branch": "main" }
        }));

        assert_eq!(record.type_tag(), "CreateEvent");
        assert_eq!(record.actor_login(), "octocat");
        assert_eq!(record.repo_name(), "octocat/hello");
        assert_eq!(record.org_login(), "github");
        assert!(record.is_public());
        assert_eq!(record.payload_str("master_branch"), Some("main"));
        assert_eq!(record.payload_str("description"), None);
    }

    #[test]
    fn test_missing_fields_fall_back_to_sentinels() {
        let record = ActivityRecord::new(json!({}));

        assert_eq!(record.type_tag(), NO_TYPE);
        assert_eq!(record.actor_login(), UNKNOWN);
        assert_eq!(record.repo_name(), UNKNOWN);
        assert_eq!(record.org_login(), UNKNOWN);
        assert!(!record.is_public());
        assert_eq!(record.payload_str("action"), None);
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_sentinels() {
        let record = ActivityRecord::new(json!({
            "type": 7,
            "actor": "octocat",
            "repo": { "name": null },
            "public": "yes",
            "payload": []
        }));

        assert_eq!(record.type_tag(), NO_TYPE);
        assert_eq!(record.actor_login(), UNKNOWN);
        assert_eq!(record.repo_name(), UNKNOWN);
        assert!(!record.is_public());
        assert_eq!(record.payload_str("action"), None);
    }

    #[test]
    fn test_records_from_array() {
        let records = records_from_json(json!([
            { "type": "PushEvent" },
            { "type": "WatchEvent" }
        ]));

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].type_tag(), "WatchEvent");
    }

    #[test]
    fn test_records_from_non_array_is_empty() {
        assert!(records_from_json(json!({ "message": "Not Found" })).is_empty());
        assert!(records_from_json(json!(null)).is_empty());
        assert!(records_from_json(json!("events")).is_empty());
    }
}
