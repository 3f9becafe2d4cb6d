use super::*;

#[test]
fn kata_summary_ignores_extra_fields_from_full_kata_listing() {
    let raw = r#"[{"id":"add-numbers","title":"Add Two Numbers","description":"d","starter_code":"def add(a, b):\n    pass"}]"#;
    let katas: Vec<KataSummary> = serde_json::from_str(raw).expect("decode listing");
    assert_eq!(
        katas,
        vec![KataSummary {
            id: KataId::from("add-numbers"),
            title: "Add Two Numbers".to_string(),
        }]
    );
}

#[test]
fn submission_serializes_with_kata_id_and_code() {
    let submission =
        Submission::new(KataId::from("42"), "  def sum(a,b): return a+b\n").expect("valid");
    let json = serde_json::to_value(&submission).expect("encode");
    assert_eq!(
        json,
        serde_json::json!({ "kata_id": "42", "code": "def sum(a,b): return a+b" })
    );
}

#[test]
fn submission_rejects_whitespace_only_code() {
    assert_eq!(
        Submission::new(KataId::from("42"), " \n\t "),
        Err(SubmissionError::EmptyCode)
    );
    assert_eq!(
        Submission::new(KataId::from("42"), ""),
        Err(SubmissionError::EmptyCode)
    );
}

#[test]
fn submission_rejects_blank_kata_id() {
    assert_eq!(
        Submission::new(KataId::from("  "), "print(1)"),
        Err(SubmissionError::MissingKata)
    );
}

#[test]
fn result_status_keeps_unknown_values_verbatim() {
    let result: SubmissionResult =
        serde_json::from_str(r#"{"status":"TIMEOUT","message":"slow"}"#).expect("decode");
    assert_eq!(result.status, ResultStatus::Other("TIMEOUT".to_string()));
    assert_eq!(result.status.icon(), "");
    assert_eq!(
        serde_json::to_value(&result.status).expect("encode"),
        serde_json::json!("TIMEOUT")
    );
}

#[test]
fn result_message_defaults_to_empty() {
    let result: SubmissionResult = serde_json::from_str(r#"{"status":"PASS"}"#).expect("decode");
    assert!(result.status.is_pass());
    assert_eq!(result.message, "");
}

#[test]
fn known_statuses_map_to_icons() {
    assert_eq!(ResultStatus::Pass.icon(), "✅");
    assert_eq!(ResultStatus::Fail.icon(), "❌");
    assert_eq!(ResultStatus::Error.icon(), "⚠️");
}

#[test]
fn headline_prefixes_known_statuses_with_their_icon() {
    let pass = SubmissionResult::new(ResultStatus::Pass, "All tests passed");
    assert_eq!(pass.headline(), "✅ PASS");
    let skipped = SubmissionResult::new(ResultStatus::Other("SKIPPED".to_string()), "");
    assert_eq!(skipped.headline(), "SKIPPED");
}

#[test]
fn submit_failed_is_an_error_result_with_fixed_message() {
    let result = SubmissionResult::submit_failed();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, SUBMIT_FAILED_MESSAGE);
    assert_eq!(result.headline(), "⚠️ ERROR");
}
