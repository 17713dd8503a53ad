//! Contract Test: Submission State Machine
//!
//! Every submission stream emits `Loading` first and then exactly one
//! terminal state (`Success` xor `Error`), after which it ends.
//!
//! Constraints verified:
//! - Loading precedes the terminal state, for every kind of outcome
//! - 200/201 are the only success statuses
//! - One request per submission, no retries
//! - Concurrent submissions are independent
//!
//! If this test fails, someone has added:
//! - Retry loops around the transport
//! - Extra intermediate states
//! - Shared state between submissions

mod common;

use bingo_core::{AddAddressResponse, ApiResult, RawJson, SubmissionResult};
use common::*;
use tokio_stream::StreamExt;

async fn run(outcome: Scripted) -> (Vec<SubmissionResult>, usize) {
    let transport = MockTransport::scripted([outcome]);
    let sdk = sdk_with(transport.clone());

    let results: Vec<SubmissionResult> = sdk.add_home_address(&sample_address()).collect().await;
    (results, transport.post_call_count())
}

#[tokio::test]
async fn every_outcome_is_loading_then_exactly_one_terminal() {
    let outcomes = vec![
        Scripted::ok(200, r#"{"id":1}"#),
        Scripted::ok(201, r#"{"status":"ok"}"#),
        Scripted::ok(200, "not json"),
        Scripted::status(204, "No Content"),
        Scripted::status(302, "Found"),
        Scripted::status(400, "Bad Request"),
        Scripted::status(401, "Unauthorized"),
        Scripted::status(500, "Internal Server Error"),
        Scripted::fail("connection refused"),
    ];

    for outcome in outcomes {
        let label = format!("{:?}", outcome);
        let (results, calls) = run(outcome).await;

        assert_eq!(results.len(), 2, "{}: expected 2 states, got {:?}", label, results);
        assert_eq!(results[0], ApiResult::Loading, "{}: Loading must come first", label);
        assert!(results[1].is_terminal(), "{}: second state must be terminal", label);
        assert_eq!(calls, 1, "{}: expected exactly one request", label);
    }
}

#[tokio::test]
async fn created_response_yields_success() {
    let (results, _) = run(Scripted::ok(201, r#"{"id":5,"status":"ok"}"#)).await;

    assert_eq!(
        results[1],
        ApiResult::Success(AddAddressResponse {
            id: Some(5),
            status: Some("ok".to_string()),
        })
    );
}

#[tokio::test]
async fn bad_request_yields_error_with_code() {
    let (results, _) = run(Scripted::status(400, "Bad Request")).await;

    match &results[1] {
        ApiResult::Error { message, code } => {
            assert_eq!(*code, Some(400));
            assert!(message.contains("Bad Request"), "message was: {}", message);
        }
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn transport_failure_yields_error_without_code() {
    let (results, calls) =
        run(Scripted::fail("dns error: failed to lookup address information")).await;

    match &results[1] {
        ApiResult::Error { message, code } => {
            assert_eq!(*code, None);
            assert!(message.contains("failed to lookup address information"));
        }
        other => panic!("expected Error, got {:?}", other),
    }
    assert_eq!(calls, 1, "a failed attempt must not be retried");
}

#[tokio::test]
async fn empty_success_body_is_network_error() {
    for body in ["", "\n"] {
        let (results, calls) = run(Scripted::ok(200, body)).await;

        assert_eq!(results[0], ApiResult::Loading);
        match &results[1] {
            ApiResult::Error { message, code } => {
                assert_eq!(*code, None);
                assert!(message.starts_with("Network error: "), "message was: {}", message);
            }
            other => panic!("empty body {:?} should be an error, got {:?}", body, other),
        }
        assert_eq!(calls, 1);
    }
}

#[tokio::test]
async fn structured_body_and_endpoint() {
    let transport = MockTransport::new();
    let sdk = sdk_with(transport.clone());

    let _: Vec<_> = sdk.add_home_address(&sample_address()).collect().await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, format!("{}/addaddress", TEST_BASE_URL));
    assert_eq!(
        transport.body_json(0),
        serde_json::json!({
            "data": {
                "type": "home",
                "street": "1 Main",
                "city": "NY",
                "state": "NY",
                "zipCode": "10001",
                "country": "USA"
            }
        })
    );
}

#[tokio::test]
async fn raw_submission_shares_status_handling() {
    let transport = MockTransport::scripted([
        Scripted::ok(200, r#"{"id":9}"#),
        Scripted::status(422, "Unprocessable Entity"),
    ]);
    let sdk = sdk_with(transport.clone());

    let raw = r#"{"data":{"street":"1 Main"}}"#;
    let first: Vec<_> = sdk.add_address_raw(RawJson::from(raw)).collect().await;
    let second: Vec<_> = sdk.add_address_raw(RawJson::from(raw)).collect().await;

    assert_eq!(first[0], ApiResult::Loading);
    assert_eq!(
        first[1],
        ApiResult::Success(AddAddressResponse {
            id: Some(9),
            status: None,
        })
    );
    assert_eq!(second[0], ApiResult::Loading);
    assert!(matches!(second[1], ApiResult::Error { code: Some(422), .. }));

    assert_eq!(transport.requests()[0].1, raw);
}

#[tokio::test]
async fn concurrent_submissions_are_independent() {
    let transport = MockTransport::scripted([
        Scripted::ok(201, r#"{"id":1}"#),
        Scripted::status(500, "Internal Server Error"),
    ]);
    let sdk = sdk_with(transport.clone());

    let first = sdk.add_home_address(&sample_address());
    let second = sdk.add_home_address(&sample_address());

    let (a, b): (Vec<_>, Vec<_>) = tokio::join!(first.collect(), second.collect());

    assert_eq!(transport.post_call_count(), 2);
    for results in [&a, &b] {
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], ApiResult::Loading);
        assert!(results[1].is_terminal());
    }

    // One of them got the success, the other the 500; which is which is unordered
    let successes = [&a, &b].iter().filter(|r| r[1].is_success()).count();
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn unpolled_stream_sends_nothing() {
    let transport = MockTransport::new();
    let sdk = sdk_with(transport.clone());

    let stream = sdk.add_home_address(&sample_address());
    drop(stream);

    assert_eq!(transport.post_call_count(), 0);
}
