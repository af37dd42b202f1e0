use manager_core::model::operation::OperationType;
use manager_core::service::operation::dto::OperationResponseDTO;
use one_dto_mapper::From;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{OperationId, ParticipantId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{Limit, first_page};
use crate::serialize::front_time;

/// Lifecycle event as stored, payload included verbatim.
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(OperationResponseDTO)]
pub(crate) struct OperationResponseRestDTO {
    pub id: OperationId,
    pub participant_id: ParticipantId,
    pub event_type: OperationTypeRestEnum,
    pub event_payload: Value,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(OperationType)]
pub(crate) enum OperationTypeRestEnum {
    Provision,
    Deprovision,
    UpdateCredentials,
    UpdateMetadata,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OperationListQueryParamsRest {
    #[serde(default = "first_page")]
    #[param(value_type = u32, default = 1)]
    pub page: u32,
    #[serde(default)]
    #[param(value_type = u32, default = 10)]
    pub limit: Limit<10>,
}
