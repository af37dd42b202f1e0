use manager_core::model::credential::CredentialStatus;
use manager_core::service::credential::dto::{
    CredentialDefinitionDTO, CredentialListItemResponseDTO, CredentialRequestDTO,
    CredentialRequestItemDTO, CredentialRequestResponseDTO, CredentialResponseDTO,
    ReplaceCredentialDTO, ReplaceCredentialsRequestDTO,
};
use one_dto_mapper::{From, Into, convert_inner, convert_inner_of_inner};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{CredentialId, ParticipantId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{Limit, first_page};
use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(CredentialRequestDTO)]
pub(crate) struct CredentialRequestRestDTO {
    #[into(with_fn = convert_inner_of_inner)]
    pub credentials: Option<Vec<CredentialDefinitionRestDTO>>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(CredentialDefinitionDTO)]
pub(crate) struct CredentialDefinitionRestDTO {
    #[schema(example = "VC1_0_JWT")]
    pub format: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "MembershipCredential")]
    pub credential_type: Option<String>,
    pub id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(ReplaceCredentialsRequestDTO)]
pub(crate) struct ReplaceCredentialsRequestRestDTO {
    #[into(with_fn = convert_inner_of_inner)]
    pub credentials: Option<Vec<ReplaceCredentialRestDTO>>,
}

/// Replacement item, persisted as supplied.
#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into(ReplaceCredentialDTO)]
pub(crate) struct ReplaceCredentialRestDTO {
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub credential_type: Option<String>,
    pub id: Option<String>,
    pub value: Option<String>,
    pub metadata: Option<Value>,
}

/// Full stored credential record.
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CredentialResponseDTO)]
pub(crate) struct CredentialResponseRestDTO {
    pub id: CredentialId,
    pub participant_id: ParticipantId,
    pub format: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub credential_id: String,
    pub value: String,
    pub metadata: Value,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub updated_at: OffsetDateTime,
}

/// List projection of a credential. Fields missing from the stored
/// metadata are left out of the JSON entirely.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CredentialListItemResponseDTO)]
pub(crate) struct CredentialListItemResponseRestDTO {
    pub id: CredentialId,
    pub request_id: Option<String>,
    pub credential_type: String,
    pub format: String,
    #[schema(example = "REQUESTED")]
    pub status: String,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub credential_hash: Option<String>,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2025-01-22T15:28:53.408Z")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CredentialRequestResponseDTO)]
pub(crate) struct CredentialRequestResponseRestDTO {
    #[schema(example = "credential-request-1737559733408")]
    pub request_id: String,
    pub participant_id: ParticipantId,
    pub status: CredentialStatusRestEnum,
    #[from(with_fn = convert_inner)]
    pub credentials: Vec<CredentialRequestItemRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CredentialRequestItemDTO)]
pub(crate) struct CredentialRequestItemRestDTO {
    pub format: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub id: String,
    pub status: CredentialStatusRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(CredentialStatus)]
pub(crate) enum CredentialStatusRestEnum {
    Requested,
    Issued,
    Expired,
    Revoked,
    Suspended,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialListQueryParamsRest {
    #[serde(default = "first_page")]
    #[param(value_type = u32, default = 1)]
    pub page: u32,
    #[serde(default)]
    #[param(value_type = u32, default = 20)]
    pub limit: Limit<20>,
    /// Return only credentials whose metadata carries this status.
    #[param(nullable = false)]
    pub status: Option<String>,
}
