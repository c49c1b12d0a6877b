use checklist_validator::{
    llm::{ChatCompletionResponse, ChatMessage},
    report::{COMPLIANT_HEADLINE, NEEDS_REVIEW_HEADLINE},
    validator::ValidationFailure,
};
use pretty_assertions::assert_eq;

mod common;
use common::{
    COMPLIANT_REPLY, MockLlmClient, NEEDS_REVIEW_REPLY, TEST_SYSTEM_PROMPT,
    create_mock_chat_response, create_test_validator,
};

#[tokio::test]
async fn test_request_is_system_then_user_message() {
    let mock = MockLlmClient::new().with_reply(COMPLIANT_REPLY);
    let validator = create_test_validator(&mock);

    validator.validate("1. Fuel quantity: checked").await.unwrap();

    let requests = mock.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].messages,
        vec![
            ChatMessage::system(TEST_SYSTEM_PROMPT),
            ChatMessage::user("1. Fuel quantity: checked"),
        ]
    );
    assert_eq!(requests[0].temperature, Some(0.3));
}

#[tokio::test]
async fn test_empty_checklist_is_still_sent() {
    let mock = MockLlmClient::new().with_reply(COMPLIANT_REPLY);
    let validator = create_test_validator(&mock);

    validator.validate("").await.unwrap();

    assert_eq!(mock.get_requests()[0].messages[1].content, "");
}

#[tokio::test]
async fn test_reply_is_trimmed() {
    let mock = MockLlmClient::new().with_reply("\n\n  {\"compliance_status\":\"Compliant\"}  \n");
    let validator = create_test_validator(&mock);

    let reply = validator.request_reply("checklist").await.unwrap();

    assert_eq!(reply, "{\"compliance_status\":\"Compliant\"}");
}

#[tokio::test]
async fn test_compliant_verdict() {
    let mock = MockLlmClient::new().with_reply(COMPLIANT_REPLY);
    let validator = create_test_validator(&mock);

    let report = validator.validate("checklist").await.unwrap();

    assert!(report.is_compliant());
    assert_eq!(report.to_markdown(), COMPLIANT_HEADLINE);
}

#[tokio::test]
async fn test_needs_review_verdict() {
    let mock = MockLlmClient::new().with_reply(NEEDS_REVIEW_REPLY);
    let validator = create_test_validator(&mock);

    let report = validator.validate("checklist").await.unwrap();

    assert!(!report.is_compliant());
    assert_eq!(report.detected_issues, vec!["Missing oxygen check"]);
    assert_eq!(
        report.improvement_suggestions,
        vec!["Add O2 system verification step"]
    );
    assert!(report.to_markdown().starts_with(NEEDS_REVIEW_HEADLINE));
}

#[tokio::test]
async fn test_reply_wrapped_in_prose() {
    let mock = MockLlmClient::new().with_reply(&format!("Here you go: {COMPLIANT_REPLY} ✅"));
    let validator = create_test_validator(&mock);

    let report = validator.validate("checklist").await.unwrap();

    assert!(report.is_compliant());
}

#[tokio::test]
async fn test_prose_reply_is_unparseable() {
    let raw = "Everything looks fine to me.";
    let mock = MockLlmClient::new().with_reply(raw);
    let validator = create_test_validator(&mock);

    let failure = validator.validate("checklist").await.unwrap_err();

    assert_eq!(failure, ValidationFailure::unparseable(raw));
}

#[tokio::test]
async fn test_service_error_becomes_failure() {
    let mock = MockLlmClient::new().with_error("invalid api key");
    let validator = create_test_validator(&mock);

    let failure = validator.validate("checklist").await.unwrap_err();

    assert_eq!(failure.kind(), "service");
    assert_eq!(failure.user_message(), "⚠️ Error: LLM error: invalid api key");
}

#[tokio::test]
async fn test_response_without_choices_is_service_failure() {
    let mock = MockLlmClient::new();
    mock.add_response(ChatCompletionResponse {
        choices: vec![],
        ..create_mock_chat_response("")
    });
    let validator = create_test_validator(&mock);

    let failure = validator.validate("checklist").await.unwrap_err();

    assert!(matches!(failure, ValidationFailure::Service { .. }));
    assert!(failure.user_message().contains("no choices"));
}

#[tokio::test]
async fn test_each_validation_is_independent() {
    let mock = MockLlmClient::new()
        .with_reply(NEEDS_REVIEW_REPLY)
        .with_reply(COMPLIANT_REPLY);
    let validator = create_test_validator(&mock);

    let first = validator.validate("first").await.unwrap();
    let second = validator.validate("second").await.unwrap();

    assert!(!first.is_compliant());
    assert!(second.is_compliant());
    assert_eq!(mock.get_requests().len(), 2);
    assert_eq!(mock.get_requests()[1].messages.len(), 2);
}
