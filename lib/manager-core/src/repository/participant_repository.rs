use std::collections::HashMap;

use shared_types::ParticipantId;
use time::OffsetDateTime;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::participant::{
    Participant, ParticipantListQuery, ParticipantStatus, UpdateParticipantRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create_participant(
        &self,
        participant: Participant,
    ) -> Result<ParticipantId, DataLayerError>;

    async fn get_participant(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<Participant>, DataLayerError>;

    async fn get_participant_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Participant>, DataLayerError>;

    async fn get_participant_list(
        &self,
        query: ParticipantListQuery,
    ) -> Result<GetListResponse<Participant>, DataLayerError>;

    async fn get_participants_in_status(
        &self,
        status: ParticipantStatus,
    ) -> Result<Vec<Participant>, DataLayerError>;

    async fn count_by_status(&self) -> Result<HashMap<ParticipantStatus, u64>, DataLayerError>;

    async fn update_participant(
        &self,
        request: UpdateParticipantRequest,
    ) -> Result<(), DataLayerError>;

    async fn set_participant_status(
        &self,
        id: &ParticipantId,
        status: ParticipantStatus,
        last_operation_at: OffsetDateTime,
    ) -> Result<(), DataLayerError>;

    /// Removes the participant together with its credentials and operations.
    async fn delete_participant(&self, id: &ParticipantId) -> Result<(), DataLayerError>;
}
