use one_dto_mapper::convert_inner;
use secrecy::ExposeSecret;
use shared_types::ParticipantId;

use super::ParticipantService;
use super::dto::{
    CreateParticipantRequestDTO, GetParticipantListResponseDTO, ParticipantResponseDTO,
    ParticipantStatsResponseDTO, UpdateParticipantRequestDTO,
};
use super::{mapper, validator};
use crate::model::common::GetListResponse;
use crate::model::participant::{ParticipantListQuery, UpdateParticipantRequest};
use crate::repository::error::DataLayerError;
use crate::service::error::{
    EntityAlreadyExistsError, EntityNotFoundError, ServiceError, ValidationError,
};

impl ParticipantService {
    /// Returns one page of participants after status and search filtering.
    pub async fn get_participant_list(
        &self,
        query: ParticipantListQuery,
    ) -> Result<GetParticipantListResponseDTO, ServiceError> {
        let participants = self
            .participant_repository
            .get_participant_list(query)
            .await?;

        Ok(GetListResponse {
            values: convert_inner(participants.values),
            total_items: participants.total_items,
        })
    }

    pub async fn get_participant(
        &self,
        id: &ParticipantId,
    ) -> Result<ParticipantResponseDTO, ServiceError> {
        let participant = self.participant_repository.get_participant(id).await?;

        let Some(participant) = participant else {
            return Err(EntityNotFoundError::Participant(*id).into());
        };

        Ok(participant.into())
    }

    /// Validates the onboarding request and stores the new participant in
    /// `PROVISION_IN_PROGRESS`. The DID and host are derived here; the
    /// password only gates the request and is dropped afterwards.
    pub async fn create_participant(
        &self,
        request: CreateParticipantRequestDTO,
    ) -> Result<ParticipantResponseDTO, ServiceError> {
        let name = request
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingParticipantName)?;

        let password = request
            .password
            .as_ref()
            .filter(|password| !password.expose_secret().is_empty())
            .ok_or(ValidationError::MissingUserPassword)?;

        validator::validate_participant_name(&name)?;
        validator::validate_password(password.expose_secret())?;

        if self
            .participant_repository
            .get_participant_by_name(&name)
            .await?
            .is_some()
        {
            return Err(EntityAlreadyExistsError::ParticipantName(name).into());
        }

        let participant = mapper::participant_from_request(request, name, &self.provisioning)?;

        let result = self
            .participant_repository
            .create_participant(participant.clone())
            .await;

        match result {
            Ok(_) => Ok(participant.into()),
            Err(DataLayerError::AlreadyExists) => {
                Err(EntityAlreadyExistsError::ParticipantName(participant.name).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Applies the given fields to an existing participant. A new name must
    /// stay unique and makes the DID follow it.
    pub async fn update_participant(
        &self,
        id: &ParticipantId,
        request: UpdateParticipantRequestDTO,
    ) -> Result<ParticipantResponseDTO, ServiceError> {
        let current = self
            .participant_repository
            .get_participant(id)
            .await?
            .ok_or(EntityNotFoundError::Participant(*id))?;

        let mut update = UpdateParticipantRequest {
            id: *id,
            name: None,
            did: None,
            description: request.description,
            metadata: request.metadata,
        };

        if let Some(name) = request.name.filter(|name| !name.is_empty()) {
            if name != current.name {
                let holder = self
                    .participant_repository
                    .get_participant_by_name(&name)
                    .await?;

                if holder.is_some_and(|other| other.id != *id) {
                    return Err(EntityAlreadyExistsError::ParticipantName(name).into());
                }
            }

            update.did = Some(mapper::did_from_name(&name, &self.provisioning.did_domain));
            update.name = Some(name);
        }

        self.participant_repository
            .update_participant(update)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotFound | DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Participant(*id).into()
                }
                error => ServiceError::from(error),
            })?;

        let updated = self
            .participant_repository
            .get_participant(id)
            .await?
            .ok_or(EntityNotFoundError::Participant(*id))?;

        Ok(updated.into())
    }

    /// Deletes the participant and everything hanging off it.
    pub async fn delete_participant(&self, id: &ParticipantId) -> Result<(), ServiceError> {
        self.participant_repository
            .delete_participant(id)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotFound | DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Participant(*id).into()
                }
                error => ServiceError::from(error),
            })
    }

    pub async fn get_participant_stats(
        &self,
    ) -> Result<ParticipantStatsResponseDTO, ServiceError> {
        let counts = self.participant_repository.count_by_status().await?;
        Ok(mapper::stats_from_counts(&counts))
    }
}
