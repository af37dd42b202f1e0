use serde_json::Value;
use shared_types::TenantId;

use super::TenantService;
use super::dto::{TenantResponseDTO, UpdateTenantRequestDTO, UpdateTenantResponseDTO};
use crate::model::tenant::Tenant;

impl TenantService {
    pub fn get_current_tenant(&self) -> TenantResponseDTO {
        Tenant::builtin().into()
    }

    /// Acknowledges a branding update and echoes the submitted brand back.
    /// Nothing is stored; the next read still returns the built-in record.
    pub fn update_tenant_branding(
        &self,
        tenant_id: &TenantId,
        request: UpdateTenantRequestDTO,
    ) -> UpdateTenantResponseDTO {
        let updated_branding = request
            .metadata
            .and_then(|metadata| metadata.brand)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        tracing::info!(%tenant_id, "acknowledging tenant branding update without persisting");

        UpdateTenantResponseDTO {
            success: true,
            message: "Tenant branding updated successfully".to_string(),
            tenant_id: *tenant_id,
            updated_branding,
        }
    }
}
