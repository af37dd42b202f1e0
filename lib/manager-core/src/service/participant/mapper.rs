use std::collections::HashMap;

use rand::seq::SliceRandom;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{CreateParticipantRequestDTO, ParticipantStatsResponseDTO};
use crate::config::ConfigValidationError;
use crate::config::core_config::ProvisioningConfig;
use crate::model::participant::{Participant, ParticipantStatus, ParticipantUser};
use crate::service::error::ServiceError;

const DEFAULT_USERNAME: &str = "admin";

pub(super) fn did_from_name(name: &str, did_domain: &str) -> String {
    format!("did:web:{name}.{did_domain}")
}

pub(super) fn participant_from_request(
    request: CreateParticipantRequestDTO,
    name: String,
    provisioning: &ProvisioningConfig,
) -> Result<Participant, ServiceError> {
    let host = provisioning
        .hosts
        .choose(&mut rand::thread_rng())
        .ok_or(ConfigValidationError::EmptyHostPool)?
        .clone();

    let now = OffsetDateTime::now_utc();
    Ok(Participant {
        id: Uuid::new_v4().into(),
        did: did_from_name(&name, &provisioning.did_domain),
        name,
        host,
        status: ParticipantStatus::ProvisionInProgress,
        description: request.description.unwrap_or_default(),
        metadata: request.metadata.unwrap_or_else(empty_object),
        user: ParticipantUser {
            username: request
                .username
                .filter(|username| !username.is_empty())
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            metadata: request.user_metadata.unwrap_or_else(empty_object),
        },
        provisioning_started_at: now,
        last_operation_at: now,
        created_at: now,
        updated_at: now,
    })
}

pub(super) fn stats_from_counts(
    counts: &HashMap<ParticipantStatus, u64>,
) -> ParticipantStatsResponseDTO {
    let count = |status: ParticipantStatus| counts.get(&status).copied().unwrap_or_default();

    ParticipantStatsResponseDTO {
        total: counts.values().sum(),
        active: count(ParticipantStatus::Active),
        provisioning: count(ParticipantStatus::ProvisionInProgress),
        deprovisioning: count(ParticipantStatus::DeprovisionInProgress),
        failed: count(ParticipantStatus::ProvisionFailed)
            + count(ParticipantStatus::DeprovisionFailed),
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
