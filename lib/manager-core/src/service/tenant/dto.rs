use one_dto_mapper::From;
use serde_json::Value;
use shared_types::TenantId;
use time::OffsetDateTime;

use crate::model::tenant::{Tenant, TenantBranding, TenantMetadata};

#[derive(Clone, Debug, PartialEq, From)]
#[from(Tenant)]
pub struct TenantResponseDTO {
    pub id: TenantId,
    pub name: String,
    pub description: String,
    pub metadata: TenantMetadataDTO,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(TenantMetadata)]
pub struct TenantMetadataDTO {
    pub organization_name: String,
    pub industry: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub region: String,
    pub environment: String,
    pub created_at: OffsetDateTime,
    pub brand: TenantBrandingDTO,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(TenantBranding)]
pub struct TenantBrandingDTO {
    pub logo: String,
    pub logo_type: String,
    pub card_color: String,
    pub sidenav_color: String,
    pub header_color: String,
    pub text_color: String,
    pub background_color: String,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateTenantRequestDTO {
    pub metadata: Option<UpdateTenantMetadataDTO>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateTenantMetadataDTO {
    pub brand: Option<Value>,
}

#[derive(Clone, Debug)]
pub struct UpdateTenantResponseDTO {
    pub success: bool,
    pub message: String,
    pub tenant_id: TenantId,
    pub updated_branding: Value,
}
