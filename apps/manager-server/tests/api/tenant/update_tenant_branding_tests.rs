use serde_json::json;
use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_update_tenant_branding_success() {
    // GIVEN
    let context = TestContext::new(None).await;
    let tenant_id = Uuid::new_v4();

    // WHEN
    let brand = json!({
        "cardColor": "#ff0000",
        "textColor": "#ffffff",
        "logo": "data:image/png;base64,aGVsbG8=",
    });
    let resp = context
        .api
        .tenants
        .update_branding(&tenant_id, json!({ "metadata": { "brand": brand } }))
        .await;

    // THEN the update is acknowledged with the supplied branding echoed back
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["message"], "Tenant branding updated successfully");
    assert_eq!(resp["tenantId"], tenant_id.to_string());
    assert_eq!(resp["updatedBranding"], brand);
}

#[tokio::test]
async fn test_update_tenant_branding_without_brand() {
    // GIVEN
    let context = TestContext::new(None).await;
    let tenant_id = Uuid::new_v4();

    // WHEN no branding is supplied
    let resp = context
        .api
        .tenants
        .update_branding(&tenant_id, json!({}))
        .await;

    // THEN the acknowledgement carries an empty branding object
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["updatedBranding"], json!({}));
}

#[tokio::test]
async fn test_update_tenant_branding_is_not_persisted() {
    // GIVEN an acknowledged branding update
    let context = TestContext::new(None).await;
    let resp = context
        .api
        .tenants
        .update_branding(
            &Uuid::new_v4(),
            json!({ "metadata": { "brand": { "cardColor": "#ff0000" } } }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    // WHEN the tenant is fetched again
    let resp = context.api.tenants.current().await;

    // THEN the builtin branding is unchanged
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["metadata"]["brand"]["cardColor"], "#1f2937");
}

#[tokio::test]
async fn test_update_tenant_branding_malformed_body() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN the body is not valid JSON
    let resp = context
        .api
        .tenants
        .update_branding_raw(&Uuid::new_v4(), "{ not json")
        .await;

    // THEN the failure is reported in the branding envelope
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], false);
    assert_eq!(resp["message"], "Invalid request body");
    assert!(!resp["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_tenant_branding_malformed_id() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .tenants
        .update_branding(&"not-a-uuid", json!({}))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["success"], false);
    assert_eq!(resp["message"], "Invalid request body");
}
