use std::collections::HashMap;

use manager_core::model::common::GetListResponse;
use manager_core::model::participant::{
    Participant, ParticipantListQuery, ParticipantStatus, UpdateParticipantRequest,
};
use manager_core::repository::error::DataLayerError;
use manager_core::repository::participant_repository::ParticipantRepository;
use shared_types::ParticipantId;
use time::OffsetDateTime;

use super::ParticipantProvider;

#[async_trait::async_trait]
impl ParticipantRepository for ParticipantProvider {
    async fn create_participant(
        &self,
        participant: Participant,
    ) -> Result<ParticipantId, DataLayerError> {
        self.store
            .write(|document| {
                if document
                    .participants
                    .iter()
                    .any(|record| record.name == participant.name)
                {
                    return Err(DataLayerError::AlreadyExists);
                }

                let id = participant.id;
                document.participants.push(participant.into());
                Ok(id)
            })
            .await
    }

    async fn get_participant(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<Participant>, DataLayerError> {
        let participant = self
            .store
            .read(|document| {
                document
                    .participants
                    .iter()
                    .find(|record| record.id == *id)
                    .cloned()
            })
            .await;

        Ok(participant.map(Into::into))
    }

    async fn get_participant_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Participant>, DataLayerError> {
        let participant = self
            .store
            .read(|document| {
                document
                    .participants
                    .iter()
                    .find(|record| record.name == name)
                    .cloned()
            })
            .await;

        Ok(participant.map(Into::into))
    }

    async fn get_participant_list(
        &self,
        query: ParticipantListQuery,
    ) -> Result<GetListResponse<Participant>, DataLayerError> {
        let response = self
            .store
            .read(|document| {
                let term = query.search.as_deref().map(str::to_lowercase);

                let filtered: Vec<_> = document
                    .participants
                    .iter()
                    .filter(|record| query.status.is_none_or(|status| record.status == status))
                    .filter(|record| {
                        term.as_deref().is_none_or(|term| {
                            record.name.to_lowercase().contains(term)
                                || record.did.to_lowercase().contains(term)
                                || record.host.to_lowercase().contains(term)
                        })
                    })
                    .collect();

                GetListResponse {
                    total_items: filtered.len() as u64,
                    values: query
                        .pagination
                        .page_of(&filtered)
                        .iter()
                        .map(|record| (*record).clone().into())
                        .collect(),
                }
            })
            .await;

        Ok(response)
    }

    async fn get_participants_in_status(
        &self,
        status: ParticipantStatus,
    ) -> Result<Vec<Participant>, DataLayerError> {
        let participants = self
            .store
            .read(|document| {
                document
                    .participants
                    .iter()
                    .filter(|record| record.status == status)
                    .map(|record| record.clone().into())
                    .collect()
            })
            .await;

        Ok(participants)
    }

    async fn count_by_status(&self) -> Result<HashMap<ParticipantStatus, u64>, DataLayerError> {
        let counts = self
            .store
            .read(|document| {
                let mut counts = HashMap::new();
                for record in &document.participants {
                    *counts.entry(record.status).or_default() += 1;
                }
                counts
            })
            .await;

        Ok(counts)
    }

    async fn update_participant(
        &self,
        request: UpdateParticipantRequest,
    ) -> Result<(), DataLayerError> {
        let now = OffsetDateTime::now_utc();

        self.store
            .write(|document| {
                if let Some(name) = &request.name {
                    if document
                        .participants
                        .iter()
                        .any(|record| record.name == *name && record.id != request.id)
                    {
                        return Err(DataLayerError::AlreadyExists);
                    }
                }

                let record = document
                    .participants
                    .iter_mut()
                    .find(|record| record.id == request.id)
                    .ok_or(DataLayerError::RecordNotUpdated)?;

                if let Some(name) = request.name {
                    record.name = name;
                }
                if let Some(did) = request.did {
                    record.did = did;
                }
                if let Some(description) = request.description {
                    record.description = description;
                }
                if let Some(metadata) = request.metadata {
                    record.metadata = metadata;
                }
                record.updated_at = now;

                Ok(())
            })
            .await
    }

    async fn set_participant_status(
        &self,
        id: &ParticipantId,
        status: ParticipantStatus,
        last_operation_at: OffsetDateTime,
    ) -> Result<(), DataLayerError> {
        self.store
            .write(|document| {
                let record = document
                    .participants
                    .iter_mut()
                    .find(|record| record.id == *id)
                    .ok_or(DataLayerError::RecordNotUpdated)?;

                record.status = status;
                record.last_operation_at = last_operation_at;
                record.updated_at = last_operation_at;

                Ok(())
            })
            .await
    }

    async fn delete_participant(&self, id: &ParticipantId) -> Result<(), DataLayerError> {
        self.store
            .write(|document| {
                let index = document
                    .participants
                    .iter()
                    .position(|record| record.id == *id)
                    .ok_or(DataLayerError::RecordNotFound)?;

                document.participants.remove(index);
                document
                    .credentials
                    .retain(|credential| credential.participant_id != *id);
                document
                    .operations
                    .retain(|operation| operation.participant_id != *id);

                Ok(())
            })
            .await
    }
}
