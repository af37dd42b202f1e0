#![cfg_attr(feature = "strict", deny(warnings))]

//! Business logic for the dataspace participant manager.
//!
//! [`ManagerCore`] wires the services to a [`repository::DataRepository`]
//! implementation. Persistence lives behind the repository traits so the
//! storage backend stays swappable.

use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use repository::DataRepository;
use service::credential::CredentialService;
use service::operation::OperationService;
use service::participant::ParticipantService;
use service::tenant::TenantService;

pub mod config;
pub mod model;
pub mod provisioner;
pub mod repository;
pub mod service;

pub struct ManagerCore {
    pub participant_service: ParticipantService,
    pub credential_service: CredentialService,
    pub operation_service: OperationService,
    pub tenant_service: TenantService,
}

impl ManagerCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        core_config: CoreConfig,
    ) -> Result<ManagerCore, ConfigValidationError> {
        let provisioning = core_config.provisioning;
        if provisioning.hosts.is_empty() {
            return Err(ConfigValidationError::EmptyHostPool);
        }
        if provisioning.did_domain.is_empty() {
            return Err(ConfigValidationError::EmptyDidDomain);
        }

        Ok(ManagerCore {
            participant_service: ParticipantService::new(
                data_provider.get_participant_repository(),
                provisioning.clone(),
            ),
            credential_service: CredentialService::new(
                data_provider.get_credential_repository(),
                data_provider.get_participant_repository(),
                provisioning,
            ),
            operation_service: OperationService::new(
                data_provider.get_operation_repository(),
                data_provider.get_participant_repository(),
            ),
            tenant_service: TenantService::new(),
        })
    }
}
