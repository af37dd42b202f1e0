use manager_core::model::participant::ParticipantStatus;
use serde_json::json;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_replace_credentials_success() {
    // GIVEN a participant with two existing credentials
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;
    context
        .store
        .credentials
        .create(participant.id, "ISSUED")
        .await;
    context
        .store
        .credentials
        .create(participant.id, "ISSUED")
        .await;

    // WHEN the whole set is replaced with a single record
    let resp = context
        .api
        .credentials
        .replace(
            &participant.id,
            json!({
                "credentials": [{
                    "format": "VC1_0_JWT",
                    "type": "DataProcessorCredential",
                    "id": "processor-1",
                    "value": "eyJhbGciOiJFUzI1NiJ9.e30.c2ln",
                    "metadata": { "status": "ISSUED", "issuer": "dataspace-issuer-service" },
                }],
            }),
        )
        .await;

    // THEN the new stored records come back
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let stored = resp.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["participantId"], participant.id.to_string());
    assert_eq!(stored[0]["format"], "VC1_0_JWT");
    assert_eq!(stored[0]["type"], "DataProcessorCredential");
    assert_eq!(stored[0]["credentialId"], "processor-1");
    assert_eq!(stored[0]["value"], "eyJhbGciOiJFUzI1NiJ9.e30.c2ln");
    assert_eq!(stored[0]["metadata"]["status"], "ISSUED");

    // and the previous set is gone
    let list = context.api.credentials.list(&participant.id).await;
    assert_eq!(list.header("x-total").unwrap(), "1");
}

#[tokio::test]
async fn test_replace_credentials_fills_defaults_for_empty_item() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN an item with no fields at all is supplied
    let resp = context
        .api
        .credentials
        .replace(&participant.id, json!({ "credentials": [{}] }))
        .await;

    // THEN it is stored with empty defaults
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp[0]["format"], "");
    assert_eq!(resp[0]["type"], "");
    assert_eq!(resp[0]["credentialId"], "");
    assert_eq!(resp[0]["value"], "");
    assert_eq!(resp[0]["metadata"], json!({}));
}

#[tokio::test]
async fn test_replace_credentials_missing_array() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .replace(&participant.id, json!({}))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing or invalid credentials array");
}

#[tokio::test]
async fn test_replace_credentials_empty_array() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .replace(&participant.id, json!({ "credentials": [] }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing or invalid credentials array");
}

#[tokio::test]
async fn test_replace_credentials_participant_not_found() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .credentials
        .replace(&Uuid::new_v4(), json!({ "credentials": [{}] }))
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Participant not found");
}
