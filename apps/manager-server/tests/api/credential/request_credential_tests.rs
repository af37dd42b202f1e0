use manager_core::model::participant::ParticipantStatus;
use serde_json::json;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_request_credentials_success() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(
            &participant.id,
            json!({
                "credentials": [
                    { "format": "VC1_0_JWT", "type": "MembershipCredential", "id": "membership-1" },
                    { "format": "VC1_0_JWT", "type": "DataProcessorCredential", "id": "processor-1" },
                ],
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert!(
        resp["requestId"]
            .as_str()
            .unwrap()
            .starts_with("credential-request-")
    );
    assert_eq!(resp["participantId"], participant.id.to_string());
    assert_eq!(resp["status"], "REQUESTED");

    let requested = resp["credentials"].as_array().unwrap();
    assert_eq!(requested.len(), 2);
    assert_eq!(requested[0]["format"], "VC1_0_JWT");
    assert_eq!(requested[0]["type"], "MembershipCredential");
    assert_eq!(requested[0]["id"], "membership-1");
    assert_eq!(requested[0]["status"], "REQUESTED");

    // and the records are stored under the same request id
    let list = context.api.credentials.list(&participant.id).await;
    assert_eq!(list.header("x-total").unwrap(), "2");
    let list = list.json_value().await;
    assert_eq!(list[0]["requestId"], resp["requestId"]);
    assert_eq!(list[0]["status"], "REQUESTED");
}

#[tokio::test]
async fn test_request_credentials_missing_array() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(&participant.id, json!({}))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing or invalid credentials array");
}

#[tokio::test]
async fn test_request_credentials_empty_array() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(&participant.id, json!({ "credentials": [] }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing or invalid credentials array");
}

#[tokio::test]
async fn test_request_credentials_incomplete_definition() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN the id is missing
    let resp = context
        .api
        .credentials
        .request(
            &participant.id,
            json!({
                "credentials": [{ "format": "VC1_0_JWT", "type": "MembershipCredential" }],
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Each credential must have format, type, and id");
}

#[tokio::test]
async fn test_request_credentials_unsupported_format() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(
            &participant.id,
            json!({
                "credentials": [
                    { "format": "SD_JWT", "type": "MembershipCredential", "id": "membership-1" },
                ],
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Only VC1_0_JWT format is supported");
}

#[tokio::test]
async fn test_request_credentials_invalid_type() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(
            &participant.id,
            json!({
                "credentials": [
                    { "format": "VC1_0_JWT", "type": "DrivingLicense", "id": "license-1" },
                ],
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["error"],
        "Invalid credential type. Must be MembershipCredential or DataProcessorCredential"
    );
}

#[tokio::test]
async fn test_request_credentials_invalid_batch_stores_nothing() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN the second definition is invalid
    let resp = context
        .api
        .credentials
        .request(
            &participant.id,
            json!({
                "credentials": [
                    { "format": "VC1_0_JWT", "type": "MembershipCredential", "id": "membership-1" },
                    { "format": "SD_JWT", "type": "MembershipCredential", "id": "membership-2" },
                ],
            }),
        )
        .await;

    // THEN the whole batch is rejected
    assert_eq!(resp.status(), 400);

    let list = context.api.credentials.list(&participant.id).await;
    assert_eq!(list.header("x-total").unwrap(), "0");
}

#[tokio::test]
async fn test_request_credentials_participant_not_found() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .request(
            &Uuid::new_v4(),
            json!({
                "credentials": [
                    { "format": "VC1_0_JWT", "type": "MembershipCredential", "id": "membership-1" },
                ],
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Participant not found");
}
