use std::sync::Arc;

use crate::config::core_config::ProvisioningConfig;
use crate::repository::credential_repository::CredentialRepository;
use crate::repository::participant_repository::ParticipantRepository;

pub mod dto;
mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct CredentialService {
    credential_repository: Arc<dyn CredentialRepository>,
    participant_repository: Arc<dyn ParticipantRepository>,
    provisioning: ProvisioningConfig,
}

impl CredentialService {
    pub fn new(
        credential_repository: Arc<dyn CredentialRepository>,
        participant_repository: Arc<dyn ParticipantRepository>,
        provisioning: ProvisioningConfig,
    ) -> Self {
        Self {
            credential_repository,
            participant_repository,
            provisioning,
        }
    }
}
