#![allow(dead_code)]

mod mocks;

pub use mocks::*;

use checklist_validator::validator::Validator;

pub const TEST_SYSTEM_PROMPT: &str = "Return JSON only.";

pub const COMPLIANT_REPLY: &str =
    r#"{"compliance_status":"Compliant","detected_issues":[],"improvement_suggestions":[]}"#;

pub const NEEDS_REVIEW_REPLY: &str = r#"{"compliance_status":"Needs Review","detected_issues":["Missing oxygen check"],"improvement_suggestions":["Add O2 system verification step"]}"#;

/// Validator backed by a clone of `mock`, so the caller can still inspect requests.
pub fn create_test_validator(mock: &MockLlmClient) -> Validator {
    Validator::with_client(Box::new(mock.clone()), TEST_SYSTEM_PROMPT, 0.3)
}
