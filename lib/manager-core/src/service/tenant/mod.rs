pub mod dto;
pub mod service;

/// The tenant surface is a fixed record plus an acknowledge-only update, so
/// the service holds no repositories.
#[derive(Clone, Default)]
pub struct TenantService {}

impl TenantService {
    pub fn new() -> Self {
        Self {}
    }
}
