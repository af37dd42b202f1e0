use serde_json::json;
use shared_types::ParticipantId;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_participant_success_flat_body() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.participants.create("acme-co", "Sup3r$ecret").await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "acme-co");
    assert_eq!(resp["status"], "PROVISION_IN_PROGRESS");
    assert_eq!(resp["did"], "did:web:acme-co.example.com");
    assert_eq!(resp["user"]["username"], "admin");
    assert!(resp["host"].as_str().unwrap().contains("example.com"));
    assert!(resp["provisioningStartedAt"].is_string());

    let id: ParticipantId = resp["id"].as_str().unwrap().parse().unwrap();
    let stored = context.store.participants.get(&id).await;
    assert_eq!(stored.name, "acme-co");
}

#[tokio::test]
async fn test_create_participant_success_nested_body() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .participants
        .create_from_body(json!({
            "participant": {
                "name": "nested-co",
                "description": "from portal",
                "metadata": { "tier": "gold" },
            },
            "user": {
                "username": "operator",
                "password": "Sup3r$ecret",
                "userMetadata": { "role": "admin" },
            },
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "nested-co");
    assert_eq!(resp["description"], "from portal");
    assert_eq!(resp["metadata"]["tier"], "gold");
    assert_eq!(resp["user"]["username"], "operator");
    assert_eq!(resp["user"]["metadata"]["role"], "admin");
}

#[tokio::test]
async fn test_create_participant_missing_name() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .participants
        .create_from_body(json!({ "password": "Sup3r$ecret" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing required field: participant.name");
}

#[tokio::test]
async fn test_create_participant_nested_body_without_user_reports_missing_name() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN a `participant` key arrives alone, the flat reading applies and
    // finds no top-level name
    let resp = context
        .api
        .participants
        .create_from_body(json!({ "participant": { "name": "half-nested" } }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing required field: participant.name");
}

#[tokio::test]
async fn test_create_participant_missing_password() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .participants
        .create_from_body(json!({ "name": "acme-co" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing required field: user.password");
}

#[tokio::test]
async fn test_create_participant_invalid_name() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.participants.create("Acme-Co", "Sup3r$ecret").await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["error"],
        "Invalid name format. Must match pattern: ^[a-z0-9][a-z0-9-]*[a-z0-9]$"
    );
}

#[tokio::test]
async fn test_create_participant_invalid_password() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.participants.create("acme-co", "password").await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert!(
        resp["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid password format.")
    );
}

#[tokio::test]
async fn test_create_participant_duplicate_name() {
    // GIVEN
    let context = TestContext::new(None).await;
    let first = context.api.participants.create("dup-co", "Sup3r$ecret").await;
    assert_eq!(first.status(), 201);

    // WHEN
    let resp = context.api.participants.create("dup-co", "Sup3r$ecret").await;

    // THEN
    assert_eq!(resp.status(), 409);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Participant with name 'dup-co' already exists");
}
