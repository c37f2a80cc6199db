//! The [`HookRecord`] dataset entry.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::ids::HookId;
use crate::types::{HookCategory, HookType};

/// One immutable entry of the hook directory.
///
/// Records are loaded once and never mutated. Optional fields are omitted
/// from the JSON form when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRecord {
    /// Unique identifier within the dataset.
    pub id: HookId,
    /// Display name (e.g. "Multi-Agent Observer").
    pub name: String,
    /// Classification tag.
    pub category: HookCategory,
    /// Short free-text description.
    pub description: String,
    /// Repository URL. Opaque to HookHub.
    pub github_url: String,
    /// Account or organization that publishes the hook.
    pub author: String,
    /// Popularity count. `None` means unranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    /// Implementation language label (e.g. "Python").
    pub language: String,
    /// Lifecycle triggers the hook implements, in display order.
    pub hook_types: Vec<HookType>,
    /// Last repository update. Date-only values are read as midnight UTC.
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    /// Curated featured flag. `None` is equivalent to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl HookRecord {
    /// Whether the record carries the featured flag.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Star count used for ranking; unranked records rank as zero.
    #[must_use]
    pub fn effective_stars(&self) -> u64 {
        self.stars.unwrap_or(0)
    }
}

/// RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Ok(Some(timestamp));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|date| Some(date.and_time(NaiveTime::MIN).and_utc()))
        .map_err(|_| de::Error::custom(format!("invalid lastUpdated timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "multi-agent-observer",
            "name": "Multi-Agent Observer",
            "category": "MONITORING",
            "description": "watches tool calls",
            "githubUrl": "https://github.com/octocat/observer",
            "author": "octocat",
            "stars": 42,
            "language": "Python",
            "hookTypes": ["PRE_TOOL_USE", "POST_TOOL_USE"],
            "lastUpdated": "2025-01-15T10:30:00Z",
            "featured": true
        })
    }

    #[test]
    fn deserializes_full_record() {
        let record: HookRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(record.id.as_str(), "multi-agent-observer");
        assert_eq!(record.category, HookCategory::Monitoring);
        assert_eq!(record.stars, Some(42));
        assert_eq!(
            record.hook_types,
            vec![HookType::PreToolUse, HookType::PostToolUse]
        );
        assert!(record.last_updated.is_some());
        assert!(record.is_featured());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let mut json = sample_json();
        let obj = json.as_object_mut().unwrap();
        let _ = obj.remove("stars");
        let _ = obj.remove("lastUpdated");
        let _ = obj.remove("featured");

        let record: HookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.stars, None);
        assert_eq!(record.featured, None);
        assert!(!record.is_featured());
        assert_eq!(record.effective_stars(), 0);
    }

    #[test]
    fn absent_fields_omitted_on_output() {
        let mut record: HookRecord = serde_json::from_value(sample_json()).unwrap();
        record.stars = None;
        record.featured = None;
        record.last_updated = None;

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("stars"));
        assert!(!obj.contains_key("featured"));
        assert!(!obj.contains_key("lastUpdated"));
        assert_eq!(obj["githubUrl"], "https://github.com/octocat/observer");
        assert_eq!(obj["hookTypes"], serde_json::json!(["PRE_TOOL_USE", "POST_TOOL_USE"]));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut json = sample_json();
        json["category"] = serde_json::json!("DEPLOYMENT");
        let result = serde_json::from_value::<HookRecord>(json);
        assert_matches!(result, Err(e) if e.to_string().contains("DEPLOYMENT"));
    }

    #[test]
    fn unknown_hook_type_is_rejected() {
        let mut json = sample_json();
        json["hookTypes"] = serde_json::json!(["PRE_COMPACT"]);
        assert!(serde_json::from_value::<HookRecord>(json).is_err());
    }

    #[test]
    fn date_only_last_updated_is_midnight_utc() {
        let mut json = sample_json();
        json["lastUpdated"] = serde_json::json!("2025-01-15");
        let record: HookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(
            record.last_updated.unwrap().to_rfc3339(),
            "2025-01-15T00:00:00+00:00"
        );
    }

    #[test]
    fn full_timestamp_last_updated_is_kept() {
        let record: HookRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(
            record.last_updated.unwrap().to_rfc3339(),
            "2025-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn null_last_updated_is_none() {
        let mut json = sample_json();
        json["lastUpdated"] = serde_json::Value::Null;
        let record: HookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.last_updated, None);
    }

    #[test]
    fn malformed_last_updated_is_rejected() {
        let mut json = sample_json();
        json["lastUpdated"] = serde_json::json!("last tuesday");
        let result = serde_json::from_value::<HookRecord>(json);
        assert_matches!(result, Err(e) if e.to_string().contains("invalid lastUpdated"));
    }

    #[test]
    fn explicit_false_featured() {
        let mut json = sample_json();
        json["featured"] = serde_json::json!(false);
        let record: HookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.featured, Some(false));
        assert!(!record.is_featured());
    }
}
