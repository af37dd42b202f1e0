use one_dto_mapper::convert_inner;

use super::OperationService;
use super::dto::GetOperationListResponseDTO;
use crate::model::common::GetListResponse;
use crate::model::operation::OperationListQuery;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl OperationService {
    /// Returns one page of the participant's lifecycle events.
    pub async fn get_operation_list(
        &self,
        query: OperationListQuery,
    ) -> Result<GetOperationListResponseDTO, ServiceError> {
        let participant_id = query.participant_id;
        if self
            .participant_repository
            .get_participant(&participant_id)
            .await?
            .is_none()
        {
            return Err(EntityNotFoundError::Participant(participant_id).into());
        }

        let operations = self.operation_repository.get_operation_list(query).await?;

        Ok(GetListResponse {
            values: convert_inner(operations.values),
            total_items: operations.total_items,
        })
    }
}
