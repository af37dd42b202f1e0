use manager_core::model::participant::ParticipantStatus;
use manager_core::service::participant::dto::{
    ParticipantResponseDTO, ParticipantStatsResponseDTO, ParticipantUserResponseDTO,
    UpdateParticipantRequestDTO,
};
use one_dto_mapper::{From, Into};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::ParticipantId;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{Limit, first_page};
use crate::serialize::front_time;

/// Onboarding request, accepted either with the payload nested under
/// `participant`/`user` keys or with the same fields at the top level.
/// The nested form wins whenever both keys are present.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum CreateParticipantRequestRestDTO {
    Nested(CreateParticipantNestedRequestRestDTO),
    Flat(CreateParticipantFlatRequestRestDTO),
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateParticipantNestedRequestRestDTO {
    pub participant: ParticipantPayloadRestDTO,
    pub user: UserPayloadRestDTO,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateParticipantFlatRequestRestDTO {
    pub name: Option<String>,
    #[schema(value_type = String)]
    pub password: Option<SecretString>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParticipantPayloadRestDTO {
    #[schema(example = "acme-co")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPayloadRestDTO {
    pub username: Option<String>,
    #[schema(value_type = String)]
    pub password: Option<SecretString>,
    pub user_metadata: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(UpdateParticipantRequestDTO)]
pub(crate) struct UpdateParticipantRequestRestDTO {
    pub name: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ParticipantResponseDTO)]
pub(crate) struct ParticipantResponseRestDTO {
    pub id: ParticipantId,
    pub name: String,
    #[schema(example = "did:web:acme-co.example.com")]
    pub did: String,
    pub host: String,
    pub status: ParticipantStatusRestEnum,
    pub description: String,
    pub metadata: Value,
    pub user: ParticipantUserResponseRestDTO,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub provisioning_started_at: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub last_operation_at: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ParticipantUserResponseDTO)]
pub(crate) struct ParticipantUserResponseRestDTO {
    pub username: String,
    pub metadata: Value,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(ParticipantStatus)]
#[into(ParticipantStatus)]
pub(crate) enum ParticipantStatusRestEnum {
    ProvisionInProgress,
    Active,
    DeprovisionInProgress,
    DeprovisionCompleted,
    ProvisionFailed,
    DeprovisionFailed,
    Error,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ParticipantStatsResponseDTO)]
pub(crate) struct ParticipantStatsResponseRestDTO {
    pub total: u64,
    pub active: u64,
    pub provisioning: u64,
    pub deprovisioning: u64,
    pub failed: u64,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParticipantListQueryParamsRest {
    #[serde(default = "first_page")]
    #[param(value_type = u32, default = 1)]
    pub page: u32,
    #[serde(default)]
    #[param(value_type = u32, default = 10)]
    pub limit: Limit<10>,
    /// Return only participants in this lifecycle status.
    #[param(inline, nullable = false)]
    pub status: Option<ParticipantStatusRestEnum>,
    /// Case-insensitive substring match against name, DID and host.
    #[param(nullable = false)]
    pub search: Option<String>,
}
