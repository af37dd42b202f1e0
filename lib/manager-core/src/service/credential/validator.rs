use super::dto::CredentialDefinitionDTO;
use crate::model::credential::CredentialType;
use crate::service::error::ValidationError;

pub(super) const SUPPORTED_FORMAT: &str = "VC1_0_JWT";

pub(super) struct ValidatedCredentialDefinition {
    pub format: String,
    pub credential_type: CredentialType,
    pub id: String,
}

/// Checks the whole batch before anything is stored. Items are checked in
/// order; presence is reported before format, format before type.
pub(super) fn validate_credential_definitions(
    definitions: &[CredentialDefinitionDTO],
) -> Result<Vec<ValidatedCredentialDefinition>, ValidationError> {
    definitions
        .iter()
        .map(|definition| {
            let format = definition
                .format
                .as_deref()
                .filter(|format| !format.is_empty())
                .ok_or(ValidationError::IncompleteCredentialDefinition)?;
            let credential_type = definition
                .credential_type
                .as_deref()
                .filter(|credential_type| !credential_type.is_empty())
                .ok_or(ValidationError::IncompleteCredentialDefinition)?;
            let id = definition
                .id
                .as_deref()
                .filter(|id| !id.is_empty())
                .ok_or(ValidationError::IncompleteCredentialDefinition)?;

            if format != SUPPORTED_FORMAT {
                return Err(ValidationError::UnsupportedCredentialFormat);
            }

            let credential_type = credential_type
                .parse::<CredentialType>()
                .map_err(|_| ValidationError::InvalidCredentialType)?;

            Ok(ValidatedCredentialDefinition {
                format: format.to_string(),
                credential_type,
                id: id.to_string(),
            })
        })
        .collect()
}
