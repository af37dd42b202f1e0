use one_dto_mapper::convert_inner;
use shared_types::{CredentialId, ParticipantId};
use time::OffsetDateTime;

use super::CredentialService;
use super::dto::{
    CredentialRequestDTO, CredentialRequestItemDTO, CredentialRequestResponseDTO,
    CredentialResponseDTO, GetCredentialListResponseDTO, ReplaceCredentialsRequestDTO,
};
use super::{mapper, validator};
use crate::model::common::GetListResponse;
use crate::model::credential::{CredentialListQuery, CredentialStatus};
use crate::model::participant::Participant;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl CredentialService {
    /// Returns one page of the participant's credentials in the list
    /// projection, optionally filtered by the status found in metadata.
    pub async fn get_credential_list(
        &self,
        query: CredentialListQuery,
    ) -> Result<GetCredentialListResponseDTO, ServiceError> {
        self.ensure_participant(&query.participant_id).await?;

        let credentials = self.credential_repository.get_credential_list(query).await?;

        Ok(GetListResponse {
            values: credentials
                .values
                .into_iter()
                .map(mapper::list_item_from_credential)
                .collect(),
            total_items: credentials.total_items,
        })
    }

    pub async fn get_credential(
        &self,
        participant_id: &ParticipantId,
        credential_id: &CredentialId,
    ) -> Result<CredentialResponseDTO, ServiceError> {
        self.ensure_participant(participant_id).await?;

        let credential = self
            .credential_repository
            .get_credential(participant_id, credential_id)
            .await?;

        let Some(credential) = credential else {
            return Err(EntityNotFoundError::Credential(*credential_id).into());
        };

        Ok(credential.into())
    }

    /// Validates the whole batch and only then stores one `REQUESTED` record
    /// per definition, all under the same request id.
    pub async fn request_credentials(
        &self,
        participant_id: &ParticipantId,
        request: CredentialRequestDTO,
    ) -> Result<CredentialRequestResponseDTO, ServiceError> {
        let participant = self.ensure_participant(participant_id).await?;

        let definitions = request
            .credentials
            .filter(|definitions| !definitions.is_empty())
            .ok_or(ValidationError::MissingCredentialsArray)?;

        let definitions = validator::validate_credential_definitions(&definitions)?;

        let now = OffsetDateTime::now_utc();
        let request_id = mapper::new_request_id(now);
        let credentials = mapper::credentials_from_definitions(
            &definitions,
            *participant_id,
            &participant.name,
            &request_id,
            &self.provisioning.issuer,
            now,
        )?;

        self.credential_repository
            .create_credentials(credentials)
            .await?;

        Ok(CredentialRequestResponseDTO {
            request_id,
            participant_id: *participant_id,
            status: CredentialStatus::Requested,
            credentials: definitions
                .into_iter()
                .map(|definition| CredentialRequestItemDTO {
                    format: definition.format,
                    credential_type: definition.credential_type.to_string(),
                    id: definition.id,
                    status: CredentialStatus::Requested,
                })
                .collect(),
        })
    }

    /// Swaps the participant's whole credential set for the supplied one.
    /// Items are stored as given; only the array itself is checked.
    pub async fn replace_credentials(
        &self,
        participant_id: &ParticipantId,
        request: ReplaceCredentialsRequestDTO,
    ) -> Result<Vec<CredentialResponseDTO>, ServiceError> {
        self.ensure_participant(participant_id).await?;

        let items = request
            .credentials
            .filter(|items| !items.is_empty())
            .ok_or(ValidationError::MissingCredentialsArray)?;

        let now = OffsetDateTime::now_utc();
        let replacement = mapper::replacement_from_request(*participant_id, items, now);

        let stored = self
            .credential_repository
            .replace_credentials(participant_id, replacement)
            .await?;

        Ok(convert_inner(stored))
    }

    async fn ensure_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Participant, ServiceError> {
        self.participant_repository
            .get_participant(participant_id)
            .await?
            .ok_or_else(|| EntityNotFoundError::Participant(*participant_id).into())
    }
}
