use one_dto_mapper::From;
use secrecy::SecretString;
use serde_json::Value;
use shared_types::ParticipantId;
use time::OffsetDateTime;

use crate::model::common::GetListResponse;
use crate::model::participant::{Participant, ParticipantStatus, ParticipantUser};

pub type GetParticipantListResponseDTO = GetListResponse<ParticipantResponseDTO>;

/// All fields optional so that presence checks produce the dedicated
/// validation errors instead of failing at deserialization.
#[derive(Debug)]
pub struct CreateParticipantRequestDTO {
    pub name: Option<String>,
    pub password: Option<SecretString>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
    pub username: Option<String>,
    pub user_metadata: Option<Value>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateParticipantRequestDTO {
    pub name: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(Participant)]
pub struct ParticipantResponseDTO {
    pub id: ParticipantId,
    pub name: String,
    pub did: String,
    pub host: String,
    pub status: ParticipantStatus,
    pub description: String,
    pub metadata: Value,
    pub user: ParticipantUserResponseDTO,
    pub provisioning_started_at: OffsetDateTime,
    pub last_operation_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(ParticipantUser)]
pub struct ParticipantUserResponseDTO {
    pub username: String,
    pub metadata: Value,
}

/// Aggregated status counts. `total` spans every stored participant, also
/// the ones outside the four reported buckets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParticipantStatsResponseDTO {
    pub total: u64,
    pub active: u64,
    pub provisioning: u64,
    pub deprovisioning: u64,
    pub failed: u64,
}
