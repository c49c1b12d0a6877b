use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNKNOWN_STATUS: &str = "Unknown";

pub const COMPLIANT_HEADLINE: &str =
    "✅ **Compliant:** All checklist items meet FAA/ICAO standards.";
pub const NEEDS_REVIEW_HEADLINE: &str = "❌ **Needs Review:** Some issues were found.";
pub const ISSUES_HEADER: &str = "**Detected Issues:**";
pub const SUGGESTIONS_HEADER: &str = "**Improvement Suggestions:**";

/// Verdict returned by the model. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    #[serde(default = "default_status", deserialize_with = "lenient_status")]
    pub compliance_status: String,
    #[serde(default, deserialize_with = "lenient_items")]
    pub detected_issues: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub improvement_suggestions: Vec<String>,
}

impl Default for ComplianceReport {
    fn default() -> Self {
        Self {
            compliance_status: default_status(),
            detected_issues: Vec::new(),
            improvement_suggestions: Vec::new(),
        }
    }
}

fn default_status() -> String {
    UNKNOWN_STATUS.to_string()
}

fn lenient_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(status) => status,
        _ => default_status(),
    })
}

// Models occasionally emit numbers or objects inside the lists; keep them as JSON text.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(values) => values.into_iter().map(item_text).collect(),
        other => vec![item_text(other)],
    };
    Ok(items)
}

fn item_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
