use one_dto_mapper::From;
use serde_json::Value;
use shared_types::{OperationId, ParticipantId};
use time::OffsetDateTime;

use crate::model::common::GetListResponse;
use crate::model::operation::{Operation, OperationType};

pub type GetOperationListResponseDTO = GetListResponse<OperationResponseDTO>;

#[derive(Clone, Debug, PartialEq, From)]
#[from(Operation)]
pub struct OperationResponseDTO {
    pub id: OperationId,
    pub participant_id: ParticipantId,
    pub event_type: OperationType,
    pub event_payload: Value,
    pub created_at: OffsetDateTime,
}
