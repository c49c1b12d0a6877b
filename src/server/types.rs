use crate::{checklist::ChecklistFormat, report::ComplianceReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub checklist_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub file_name: String,
    pub format: ChecklistFormat,
    pub checklist_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub validation_id: Uuid,
    pub validated_at: DateTime<Utc>,
    pub compliant: bool,
    pub report: ComplianceReport,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_id: Option<Uuid>,
    pub kind: String,
    pub error: String,
}
