use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::ParticipantId;
use strum::Display;
use time::OffsetDateTime;

use super::common::ListPagination;

#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub did: String,
    pub host: String,
    pub status: ParticipantStatus,
    pub description: String,
    pub metadata: Value,
    pub user: ParticipantUser,
    pub provisioning_started_at: OffsetDateTime,
    pub last_operation_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Connector account embedded in the participant record. The password is
/// checked on creation but never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantUser {
    pub username: String,
    pub metadata: Value,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantStatus {
    ProvisionInProgress,
    Active,
    DeprovisionInProgress,
    DeprovisionCompleted,
    ProvisionFailed,
    DeprovisionFailed,
    Error,
}

impl ParticipantStatus {
    /// Lifecycle transitions the provisioner is allowed to perform.
    pub fn can_transition_to(self, next: ParticipantStatus) -> bool {
        matches!(
            (self, next),
            (
                ParticipantStatus::ProvisionInProgress,
                ParticipantStatus::Active | ParticipantStatus::ProvisionFailed
            ) | (
                ParticipantStatus::DeprovisionInProgress,
                ParticipantStatus::DeprovisionCompleted | ParticipantStatus::DeprovisionFailed
            )
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateParticipantRequest {
    pub id: ParticipantId,
    pub name: Option<String>,
    pub did: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug)]
pub struct ParticipantListQuery {
    pub pagination: ListPagination,
    pub status: Option<ParticipantStatus>,
    pub search: Option<String>,
}
