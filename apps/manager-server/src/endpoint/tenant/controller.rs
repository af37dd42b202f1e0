use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::TenantId;

use super::dto::{
    TenantResponseRestDTO, TenantUpdateRejectionRestDTO, UpdateTenantRequestRestDTO,
    UpdateTenantResponseRestDTO,
};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/tenants/me",
    responses(
        (status = 200, description = "OK", body = TenantResponseRestDTO)
    ),
    tag = "tenant_management",
    summary = "Retrieve current tenant",
    description = "Returns the tenant owning this deployment, branding included.",
)]
pub(crate) async fn get_current_tenant(state: State<AppState>) -> Json<TenantResponseRestDTO> {
    Json(state.core.tenant_service.get_current_tenant().into())
}

#[utoipa::path(
    put,
    path = "/v1/tenants/{id}",
    request_body = UpdateTenantRequestRestDTO,
    responses(
        (status = 200, description = "OK", body = UpdateTenantResponseRestDTO),
        (status = 400, description = "Invalid request body", body = TenantUpdateRejectionRestDTO),
    ),
    params(
        ("id" = TenantId, Path, description = "Tenant id")
    ),
    tag = "tenant_management",
    summary = "Update tenant branding",
    description = "Acknowledges a branding update and echoes the submitted brand back. The update is not persisted.",
)]
#[axum::debug_handler]
pub(crate) async fn put_tenant(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<TenantId>, TenantUpdateRejectionRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateTenantRequestRestDTO>,
        TenantUpdateRejectionRestDTO,
    >,
) -> Json<UpdateTenantResponseRestDTO> {
    Json(
        state
            .core
            .tenant_service
            .update_tenant_branding(&id, request.into())
            .into(),
    )
}
