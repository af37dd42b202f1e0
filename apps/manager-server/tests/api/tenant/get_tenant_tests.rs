use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_current_tenant() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.tenants.current().await;

    // THEN the builtin deployment owner is returned
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["id"], "519b0efa-9cc6-479d-8b1b-7586f835df40");
    assert_eq!(resp["name"], "tech-solutions-srl");
    assert!(
        resp["description"]
            .as_str()
            .unwrap()
            .starts_with("Company specialized in DataSpace solutions")
    );

    let metadata = &resp["metadata"];
    assert_eq!(metadata["organizationName"], "Tech Solutions S.r.l.");
    assert_eq!(metadata["industry"], "Technology");
    assert_eq!(metadata["contactName"], "Mario Rossi");
    assert_eq!(metadata["email"], "mario.rossi@techsolutions.it");
    assert_eq!(metadata["phone"], "+39 02 1234567");
    assert_eq!(metadata["role"], "CEO");
    assert_eq!(metadata["region"], "eu-west-1");
    assert_eq!(metadata["environment"], "production");
    assert_eq!(metadata["createdAt"], "2025-01-22T15:28:53.408Z");
}

#[tokio::test]
async fn test_get_current_tenant_branding() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.tenants.current().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    let brand = &resp["metadata"]["brand"];
    assert!(
        brand["logo"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,")
    );
    assert_eq!(brand["logoType"], "base64");
    assert_eq!(brand["cardColor"], "#1f2937");
    assert_eq!(brand["sidenavColor"], "#1f2937");
    assert_eq!(brand["headerColor"], "#1f2937");
    assert_eq!(brand["textColor"], "#f9fafb");
    assert_eq!(brand["backgroundColor"], "#0f172a");
}
