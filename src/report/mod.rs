mod types;

pub use types::*;

use crate::validator::ValidationFailure;
use serde_json::Value;
use tracing::{debug, warn};

/// Parses a raw model reply into a [`ComplianceReport`].
///
/// The reply is first parsed as-is. If that fails, the text between the first
/// `{` and the last `}` is parsed instead, which covers replies wrapped in prose
/// or code fences. Nested or multiple fragments may still mis-extract.
pub fn parse_reply(raw: &str) -> Result<ComplianceReport, ValidationFailure> {
    let trimmed = raw.trim();

    if let Ok(report) = parse_object(trimmed) {
        return Ok(report);
    }

    let Some(candidate) = extract_json_object(trimmed) else {
        warn!("Model reply contains no JSON object ({} bytes)", raw.len());
        return Err(ValidationFailure::unparseable(raw));
    };

    debug!(
        "Strict parse failed, retrying on embedded object of {} bytes",
        candidate.len()
    );

    parse_object(candidate).map_err(|e| {
        warn!("Embedded JSON object could not be parsed: {}", e);
        ValidationFailure::unparseable(raw)
    })
}

// Arrays and scalars are valid JSON but never a report.
fn parse_object(text: &str) -> serde_json::Result<ComplianceReport> {
    match serde_json::from_str::<Value>(text)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        _ => Err(serde::de::Error::custom("expected a JSON object")),
    }
}

/// Slice from the first `{` to the last `}` inclusive, if both exist in that order.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Renders a report as the Markdown summary shown to the user.
pub fn render(report: &ComplianceReport) -> String {
    let mut sections = Vec::with_capacity(3);

    sections.push(if report.is_compliant() {
        COMPLIANT_HEADLINE.to_string()
    } else {
        NEEDS_REVIEW_HEADLINE.to_string()
    });

    if !report.detected_issues.is_empty() {
        sections.push(bullet_section(ISSUES_HEADER, &report.detected_issues));
    }

    if !report.improvement_suggestions.is_empty() {
        sections.push(bullet_section(
            SUGGESTIONS_HEADER,
            &report.improvement_suggestions,
        ));
    }

    sections.join("\n\n")
}

fn bullet_section(header: &str, items: &[String]) -> String {
    let mut section = header.to_string();
    for item in items {
        section.push_str("\n- ");
        section.push_str(item);
    }
    section
}

impl ComplianceReport {
    /// Only an explicit "compliant" counts; anything else needs review.
    pub fn is_compliant(&self) -> bool {
        self.compliance_status.eq_ignore_ascii_case("compliant")
    }

    pub fn to_markdown(&self) -> String {
        render(self)
    }
}
