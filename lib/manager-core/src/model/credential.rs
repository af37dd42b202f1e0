use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{CredentialId, ParticipantId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::ListPagination;

/// Stored credential record. `format` and `credential_type` are kept as plain
/// strings since wholesale replacement accepts them unchecked; the enums below
/// describe the values the request flow accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct Credential {
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

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum CredentialType {
    MembershipCredential,
    DataProcessorCredential,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialStatus {
    Requested,
    Issued,
    Expired,
    Revoked,
    Suspended,
}

/// Metadata written by the issuance request flow. Replacement may store any
/// JSON object here, so reads go through a lenient projection instead.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialMetadata {
    pub request_id: String,
    pub status: CredentialStatus,
    pub issuer: String,
    pub subject: String,
}

#[derive(Clone, Debug)]
pub struct CredentialListQuery {
    pub pagination: ListPagination,
    pub participant_id: ParticipantId,
    pub status: Option<String>,
}
