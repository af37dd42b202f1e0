use manager_core::model::participant::ParticipantStatus;
use serde_json::json;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_update_participant_description_and_metadata() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .participants
        .update(
            &participant.id,
            json!({
                "description": "updated description",
                "metadata": { "tier": "silver" },
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["description"], "updated description");
    assert_eq!(resp["metadata"]["tier"], "silver");
    assert_eq!(resp["name"], participant.name);

    let stored = context.store.participants.get(&participant.id).await;
    assert_eq!(stored.description, "updated description");
    assert!(stored.updated_at >= participant.updated_at);
}

#[tokio::test]
async fn test_update_participant_rename_regenerates_did() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .participants
        .update(&participant.id, json!({ "name": "renamed-co" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "renamed-co");
    assert_eq!(resp["did"], "did:web:renamed-co.example.com");
}

#[tokio::test]
async fn test_update_participant_rename_to_taken_name_conflicts() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;
    context
        .store
        .participants
        .create("taken-name", ParticipantStatus::Active)
        .await;

    // WHEN
    let resp = context
        .api
        .participants
        .update(&participant.id, json!({ "name": "taken-name" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["error"],
        "Participant with name 'taken-name' already exists"
    );
}

#[tokio::test]
async fn test_update_participant_rename_to_own_name_is_allowed() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;

    // WHEN
    let resp = context
        .api
        .participants
        .update(&participant.id, json!({ "name": participant.name }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], participant.name);
}

#[tokio::test]
async fn test_update_participant_not_found() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .participants
        .update(&Uuid::new_v4(), json!({ "description": "missing" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Participant not found");
}
