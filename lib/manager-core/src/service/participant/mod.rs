use std::sync::Arc;

use crate::config::core_config::ProvisioningConfig;
use crate::repository::participant_repository::ParticipantRepository;

pub mod dto;
mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct ParticipantService {
    participant_repository: Arc<dyn ParticipantRepository>,
    provisioning: ProvisioningConfig,
}

impl ParticipantService {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        provisioning: ProvisioningConfig,
    ) -> Self {
        Self {
            participant_repository,
            provisioning,
        }
    }
}
