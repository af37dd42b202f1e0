use indoc::indoc;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_build_info() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.build_info().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp["build_time"].is_string());
    assert!(resp["branch"].is_string());
    assert!(resp["rust_version"].is_string());
}

#[tokio::test]
async fn test_health() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.health().await;

    // THEN
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_technical_endpoints_can_be_disabled() {
    // GIVEN
    let config = indoc! {"
        app:
            enableServerInfo: false
    "};
    let context = TestContext::new(Some(config.to_string())).await;

    // WHEN
    let build_info = context.api.other.build_info().await;
    let health = context.api.other.health().await;

    // THEN
    assert_eq!(build_info.status(), 404);
    assert_eq!(health.status(), 404);
}

#[tokio::test]
async fn test_openapi_json() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.openapi_json().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp["paths"]["/v1/participants"].is_object());
    assert!(
        resp["paths"]["/api/v1/participants/{id}/credentials/{credentialId}"].is_object()
    );
}

#[tokio::test]
async fn test_openapi_yaml() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.openapi_yaml().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.text().await;
    assert!(body.starts_with("openapi:"));
}

#[tokio::test]
async fn test_openapi_can_be_disabled() {
    // GIVEN
    let config = indoc! {"
        app:
            enableOpenApi: false
    "};
    let context = TestContext::new(Some(config.to_string())).await;

    // WHEN
    let resp = context.api.other.openapi_json().await;

    // THEN
    assert_eq!(resp.status(), 404);
}
