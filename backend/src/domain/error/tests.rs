//! Tests for domain error construction and the wire format.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(ErrorCode::InvalidCountry, true)]
#[case(ErrorCode::DuplicateVisit, true)]
#[case(ErrorCode::NotVisited, true)]
#[case(ErrorCode::DuplicateName, true)]
#[case(ErrorCode::InvalidRequest, false)]
#[case(ErrorCode::NotFound, false)]
#[case(ErrorCode::ServiceUnavailable, false)]
#[case(ErrorCode::InternalError, false)]
fn recoverable_codes_are_the_validation_failures(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_recoverable(), expected);
}

#[rstest]
fn try_new_rejects_blank_message() {
    let result = Error::try_new(ErrorCode::NotFound, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn serialises_message_under_error_key() {
    let err = Error::not_visited("Country not visited.");
    let value = serde_json::to_value(&err).expect("error serialises");

    assert_eq!(
        value,
        json!({ "code": "not_visited", "error": "Country not visited." })
    );
}

#[rstest]
fn details_and_trace_id_survive_a_round_trip() {
    let err = Error::invalid_request("bad form")
        .with_details(json!({ "field": "user" }))
        .with_trace_id("00000000-0000-0000-0000-000000000000");
    let text = serde_json::to_string(&err).expect("error serialises");
    let back: Error = serde_json::from_str(&text).expect("error deserialises");

    assert_eq!(back, err);
    assert_eq!(back.trace_id(), Some("00000000-0000-0000-0000-000000000000"));
}

#[rstest]
fn deserialisation_rejects_blank_trace_id() {
    let payload = json!({ "code": "not_found", "error": "missing", "traceId": " " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let id = TraceId::generate();
    let err = TraceId::scope(id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some(id.to_string().as_str()));
}
