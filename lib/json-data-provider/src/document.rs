//! On-disk shape of the store document.
//!
//! Field names and timestamp formatting match the JSON file consumed by the
//! frontend tooling, so an existing store file keeps loading unchanged.

use manager_core::model::credential::Credential;
use manager_core::model::operation::{Operation, OperationType};
use manager_core::model::participant::{Participant, ParticipantStatus, ParticipantUser};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{CredentialId, OperationId, ParticipantId};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreDocument {
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
    #[serde(default)]
    pub credentials: Vec<CredentialRecord>,
    #[serde(default)]
    pub operations: Vec<OperationRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize, From, Into)]
#[from(Participant)]
#[into(Participant)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParticipantRecord {
    pub id: ParticipantId,
    pub name: String,
    pub did: String,
    pub host: String,
    pub status: ParticipantStatus,
    pub description: String,
    pub metadata: Value,
    pub user: ParticipantUserRecord,
    #[serde(with = "time::serde::rfc3339")]
    pub provisioning_started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_operation_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, From, Into)]
#[from(ParticipantUser)]
#[into(ParticipantUser)]
pub(crate) struct ParticipantUserRecord {
    pub username: String,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize, From, Into)]
#[from(Credential)]
#[into(Credential)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialRecord {
    pub id: CredentialId,
    pub participant_id: ParticipantId,
    pub format: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub credential_id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub metadata: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, From, Into)]
#[from(Operation)]
#[into(Operation)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OperationRecord {
    pub id: OperationId,
    pub participant_id: ParticipantId,
    pub event_type: OperationType,
    #[serde(default)]
    pub event_payload: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
