use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use manager_core::service::tenant::dto::{
    TenantBrandingDTO, TenantMetadataDTO, TenantResponseDTO, UpdateTenantMetadataDTO,
    UpdateTenantRequestDTO, UpdateTenantResponseDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::TenantId;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(TenantResponseDTO)]
pub(crate) struct TenantResponseRestDTO {
    pub id: TenantId,
    pub name: String,
    pub description: String,
    pub metadata: TenantMetadataRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(TenantMetadataDTO)]
pub(crate) struct TenantMetadataRestDTO {
    pub organization_name: String,
    pub industry: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub region: String,
    pub environment: String,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub created_at: OffsetDateTime,
    pub brand: TenantBrandingRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(TenantBrandingDTO)]
pub(crate) struct TenantBrandingRestDTO {
    pub logo: String,
    #[schema(example = "base64")]
    pub logo_type: String,
    #[schema(example = "#1f2937")]
    pub card_color: String,
    pub sidenav_color: String,
    pub header_color: String,
    pub text_color: String,
    pub background_color: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(UpdateTenantRequestDTO)]
pub(crate) struct UpdateTenantRequestRestDTO {
    #[into(with_fn = convert_inner)]
    pub metadata: Option<UpdateTenantMetadataRestDTO>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(UpdateTenantMetadataDTO)]
pub(crate) struct UpdateTenantMetadataRestDTO {
    pub brand: Option<Value>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(UpdateTenantResponseDTO)]
pub(crate) struct UpdateTenantResponseRestDTO {
    pub success: bool,
    #[schema(example = "Tenant branding updated successfully")]
    pub message: String,
    pub tenant_id: TenantId,
    pub updated_branding: Value,
}

/// Branding updates report failures in their own envelope instead of the
/// plain `error` body used elsewhere.
#[derive(Serialize, ToSchema)]
pub(crate) struct TenantUpdateRejectionRestDTO {
    pub success: bool,
    #[schema(example = "Invalid request body")]
    pub message: String,
    pub error: String,
}

impl TenantUpdateRejectionRestDTO {
    fn invalid_body(error: String) -> Self {
        Self {
            success: false,
            message: "Invalid request body".to_string(),
            error,
        }
    }
}

impl From<JsonRejection> for TenantUpdateRejectionRestDTO {
    fn from(value: JsonRejection) -> Self {
        Self::invalid_body(value.body_text())
    }
}

impl From<PathRejection> for TenantUpdateRejectionRestDTO {
    fn from(value: PathRejection) -> Self {
        Self::invalid_body(value.body_text())
    }
}

impl IntoResponse for TenantUpdateRejectionRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
