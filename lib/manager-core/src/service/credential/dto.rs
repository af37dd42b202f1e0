use one_dto_mapper::From;
use serde_json::Value;
use shared_types::{CredentialId, ParticipantId};
use time::OffsetDateTime;

use crate::model::common::GetListResponse;
use crate::model::credential::{Credential, CredentialStatus};

pub type GetCredentialListResponseDTO = GetListResponse<CredentialListItemResponseDTO>;

/// Issuance request. The array and every item field stay optional so the
/// service can report which part is missing.
#[derive(Clone, Debug, Default)]
pub struct CredentialRequestDTO {
    pub credentials: Option<Vec<CredentialDefinitionDTO>>,
}

#[derive(Clone, Debug, Default)]
pub struct CredentialDefinitionDTO {
    pub format: Option<String>,
    pub credential_type: Option<String>,
    pub id: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ReplaceCredentialsRequestDTO {
    pub credentials: Option<Vec<ReplaceCredentialDTO>>,
}

/// Replacement item, stored without validation.
#[derive(Clone, Debug, Default)]
pub struct ReplaceCredentialDTO {
    pub format: Option<String>,
    pub credential_type: Option<String>,
    pub id: Option<String>,
    pub value: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(Credential)]
pub struct CredentialResponseDTO {
    pub id: CredentialId,
    pub participant_id: ParticipantId,
    pub format: String,
    pub credential_type: String,
    pub credential_id: String,
    pub value: String,
    pub metadata: Value,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// List projection pulling the issuance fields out of the stored metadata.
/// `status` stays a plain string because replaced records may carry anything.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialListItemResponseDTO {
    pub id: CredentialId,
    pub request_id: Option<String>,
    pub credential_type: String,
    pub format: String,
    pub status: String,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub credential_hash: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct CredentialRequestResponseDTO {
    pub request_id: String,
    pub participant_id: ParticipantId,
    pub status: CredentialStatus,
    pub credentials: Vec<CredentialRequestItemDTO>,
}

#[derive(Clone, Debug)]
pub struct CredentialRequestItemDTO {
    pub format: String,
    pub credential_type: String,
    pub id: String,
    pub status: CredentialStatus,
}
