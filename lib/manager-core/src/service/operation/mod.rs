use std::sync::Arc;

use crate::repository::operation_repository::OperationRepository;
use crate::repository::participant_repository::ParticipantRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct OperationService {
    operation_repository: Arc<dyn OperationRepository>,
    participant_repository: Arc<dyn ParticipantRepository>,
}

impl OperationService {
    pub fn new(
        operation_repository: Arc<dyn OperationRepository>,
        participant_repository: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            operation_repository,
            participant_repository,
        }
    }
}
