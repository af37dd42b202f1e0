use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{OperationId, ParticipantId};
use strum::Display;
use time::OffsetDateTime;

use super::common::ListPagination;

/// Audit event attached to a participant lifecycle step.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub id: OperationId,
    pub participant_id: ParticipantId,
    pub event_type: OperationType,
    pub event_payload: Value,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Provision,
    Deprovision,
    UpdateCredentials,
    UpdateMetadata,
}

#[derive(Clone, Debug)]
pub struct OperationListQuery {
    pub pagination: ListPagination,
    pub participant_id: ParticipantId,
}
