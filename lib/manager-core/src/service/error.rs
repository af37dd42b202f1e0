use shared_types::{CredentialId, ParticipantId};
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::model::participant::ParticipantStatus;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    EntityAlreadyExists(#[from] EntityAlreadyExistsError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    Repository(DataLayerError),
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        Self::Repository(value)
    }
}

impl From<ConfigValidationError> for ServiceError {
    fn from(value: ConfigValidationError) -> Self {
        Self::BusinessLogic(BusinessLogicError::InvalidProvisioningConfig(value))
    }
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Participant `{0}` not found")]
    Participant(ParticipantId),

    #[error("Credential `{0}` not found")]
    Credential(CredentialId),
}

#[derive(Debug, Error)]
pub enum EntityAlreadyExistsError {
    #[error("Participant with name '{0}' already exists")]
    ParticipantName(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Status transition from {from} to {to} is not allowed")]
    StatusTransitionNotAllowed {
        from: ParticipantStatus,
        to: ParticipantStatus,
    },

    #[error("Invalid provisioning configuration: {0}")]
    InvalidProvisioningConfig(ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: participant.name")]
    MissingParticipantName,

    #[error("Missing required field: user.password")]
    MissingUserPassword,

    #[error("Invalid name format. Must match pattern: ^[a-z0-9][a-z0-9-]*[a-z0-9]$")]
    InvalidParticipantName,

    #[error(
        "Invalid password format. Must contain at least one uppercase, one lowercase, one number and one special character. Spaces are not allowed."
    )]
    InvalidPasswordFormat,

    #[error("Missing or invalid credentials array")]
    MissingCredentialsArray,

    #[error("Each credential must have format, type, and id")]
    IncompleteCredentialDefinition,

    #[error("Only VC1_0_JWT format is supported")]
    UnsupportedCredentialFormat,

    #[error("Invalid credential type. Must be MembershipCredential or DataProcessorCredential")]
    InvalidCredentialType,
}
