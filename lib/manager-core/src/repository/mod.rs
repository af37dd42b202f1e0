use std::sync::Arc;

use credential_repository::CredentialRepository;
use operation_repository::OperationRepository;
use participant_repository::ParticipantRepository;

pub mod error;

pub mod credential_repository;
pub mod operation_repository;
pub mod participant_repository;

pub trait DataRepository: Send + Sync {
    fn get_participant_repository(&self) -> Arc<dyn ParticipantRepository>;
    fn get_credential_repository(&self) -> Arc<dyn CredentialRepository>;
    fn get_operation_repository(&self) -> Arc<dyn OperationRepository>;
}
