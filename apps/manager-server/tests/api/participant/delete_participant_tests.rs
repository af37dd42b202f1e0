use manager_core::model::operation::OperationType;
use manager_core::model::participant::ParticipantStatus;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_delete_participant_removes_dependent_records() {
    // GIVEN
    let (context, participant) =
        TestContext::new_with_participant(ParticipantStatus::Active).await;
    let credential = context
        .store
        .credentials
        .create(participant.id, "ISSUED")
        .await;
    context
        .store
        .operations
        .create(participant.id, OperationType::Provision)
        .await;

    // WHEN
    let resp = context.api.participants.delete(&participant.id).await;

    // THEN
    assert_eq!(resp.status(), 204);

    assert!(context.store.participants.find(&participant.id).await.is_none());
    assert!(
        context
            .store
            .credentials
            .find(&participant.id, &credential.id)
            .await
            .is_none()
    );

    let resp = context.api.participants.get(&participant.id).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_participant_not_found() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.participants.delete(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Participant not found");
}
