use manager_core::model::participant::ParticipantStatus;
use similar_asserts::assert_eq;

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_participant_success() {
    // GIVEN
    let context = TestContext::new(None).await;
    for _ in 0..3 {
        context
            .store
            .participants
            .create(
                &fixtures::random_participant_name(),
                ParticipantStatus::Active,
            )
            .await;
    }

    // WHEN
    let resp = context.api.participants.list().await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("x-total").unwrap(), "3");
    assert_eq!(resp.header("x-page").unwrap(), "1");
    assert_eq!(resp.header("x-limit").unwrap(), "10");

    let resp = resp.json_value().await;
    let participants = resp.as_array().unwrap();
    assert_eq!(participants.len(), 3);
    assert!(participants[0]["provisioningStartedAt"].is_string());
    assert!(participants[0]["user"]["username"].is_string());
}

#[tokio::test]
async fn test_list_participant_pagination() {
    // GIVEN
    let context = TestContext::new(None).await;
    for index in 0..15 {
        context
            .store
            .participants
            .create(&format!("participant-{index:02}"), ParticipantStatus::Active)
            .await;
    }

    // WHEN
    let resp = context
        .api
        .participants
        .list_with_query("page=2&limit=10")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("x-total").unwrap(), "15");
    assert_eq!(resp.header("x-page").unwrap(), "2");
    assert_eq!(resp.header("x-limit").unwrap(), "10");

    let resp = resp.json_value().await;
    let participants = resp.as_array().unwrap();
    assert_eq!(participants.len(), 5);
    assert_eq!(participants[0]["name"], "participant-10");
}

#[tokio::test]
async fn test_list_participant_default_page_size_is_ten() {
    // GIVEN
    let context = TestContext::new(None).await;
    for _ in 0..12 {
        context
            .store
            .participants
            .create(
                &fixtures::random_participant_name(),
                ParticipantStatus::Active,
            )
            .await;
    }

    // WHEN
    let resp = context.api.participants.list().await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("x-total").unwrap(), "12");

    let resp = resp.json_value().await;
    assert_eq!(resp.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_participant_filter_by_status() {
    // GIVEN
    let context = TestContext::new(None).await;
    for _ in 0..2 {
        context
            .store
            .participants
            .create(
                &fixtures::random_participant_name(),
                ParticipantStatus::Active,
            )
            .await;
    }
    context
        .store
        .participants
        .create(
            &fixtures::random_participant_name(),
            ParticipantStatus::ProvisionInProgress,
        )
        .await;

    // WHEN
    let resp = context
        .api
        .participants
        .list_with_query("status=ACTIVE")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("x-total").unwrap(), "2");

    let resp = resp.json_value().await;
    let participants = resp.as_array().unwrap();
    assert_eq!(participants.len(), 2);
    assert!(
        participants
            .iter()
            .all(|participant| participant["status"] == "ACTIVE")
    );
}

#[tokio::test]
async fn test_list_participant_unknown_status_is_rejected() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .participants
        .list_with_query("status=SOMETHING")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn test_list_participant_search_is_case_insensitive() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .store
        .participants
        .create("alpha-logistics", ParticipantStatus::Active)
        .await;
    context
        .store
        .participants
        .create("beta-shipping", ParticipantStatus::Active)
        .await;

    // WHEN
    let resp = context
        .api
        .participants
        .list_with_query("search=LOGIST")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let participants = resp.as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["name"], "alpha-logistics");
}

#[tokio::test]
async fn test_list_participant_search_matches_did() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .store
        .participants
        .create("gamma-cargo", ParticipantStatus::Active)
        .await;
    context
        .store
        .participants
        .create("delta-freight", ParticipantStatus::Active)
        .await;

    // WHEN the term only appears in the derived DID
    let resp = context
        .api
        .participants
        .list_with_query("search=did%3Aweb%3Agamma")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let participants = resp.as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["name"], "gamma-cargo");
}
