use serde::Deserialize;
use serde_json::Value;
use shared_types::{CredentialId, ParticipantId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{CredentialListItemResponseDTO, ReplaceCredentialDTO};
use super::validator::ValidatedCredentialDefinition;
use crate::model::credential::{Credential, CredentialMetadata, CredentialStatus};
use crate::service::error::ServiceError;

const UNKNOWN_STATUS: &str = "UNKNOWN";

pub(super) fn new_request_id(now: OffsetDateTime) -> String {
    format!("credential-request-{}", now.unix_timestamp_nanos() / 1_000_000)
}

pub(super) fn credentials_from_definitions(
    definitions: &[ValidatedCredentialDefinition],
    participant_id: ParticipantId,
    subject: &str,
    request_id: &str,
    issuer: &str,
    now: OffsetDateTime,
) -> Result<Vec<Credential>, ServiceError> {
    definitions
        .iter()
        .map(|definition| {
            let id: CredentialId = Uuid::new_v4().into();
            let metadata = serde_json::to_value(CredentialMetadata {
                request_id: request_id.to_string(),
                status: CredentialStatus::Requested,
                issuer: issuer.to_string(),
                subject: subject.to_string(),
            })
            .map_err(|e| ServiceError::MappingError(e.to_string()))?;

            Ok(Credential {
                id,
                participant_id,
                format: definition.format.clone(),
                credential_type: definition.credential_type.to_string(),
                credential_id: id.to_string(),
                value: String::new(),
                metadata,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}

pub(super) fn replacement_from_request(
    participant_id: ParticipantId,
    items: Vec<ReplaceCredentialDTO>,
    now: OffsetDateTime,
) -> Vec<Credential> {
    items
        .into_iter()
        .map(|item| Credential {
            id: Uuid::new_v4().into(),
            participant_id,
            format: item.format.unwrap_or_default(),
            credential_type: item.credential_type.unwrap_or_default(),
            credential_id: item.id.unwrap_or_default(),
            value: item.value.unwrap_or_default(),
            metadata: item
                .metadata
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// Stored metadata is free-form, so the projection takes what it can get and
/// leaves the rest empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CredentialMetadataProjection {
    request_id: Option<String>,
    status: Option<String>,
    issued_at: Option<String>,
    expires_at: Option<String>,
    credential_hash: Option<String>,
}

pub(super) fn list_item_from_credential(credential: Credential) -> CredentialListItemResponseDTO {
    let projection: CredentialMetadataProjection =
        serde_json::from_value(credential.metadata).unwrap_or_default();

    CredentialListItemResponseDTO {
        id: credential.id,
        request_id: projection.request_id,
        credential_type: credential.credential_type,
        format: credential.format,
        status: projection
            .status
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        issued_at: projection.issued_at,
        expires_at: projection.expires_at,
        credential_hash: projection.credential_hash,
        created_at: credential.created_at,
    }
}
