use std::sync::Arc;

use manager_core::model::credential::Credential;
use manager_core::model::operation::{Operation, OperationType};
use manager_core::model::participant::{Participant, ParticipantStatus, ParticipantUser};
use shared_types::ParticipantId;
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::store::FileStore;

pub(crate) fn get_dummy_date() -> OffsetDateTime {
    datetime!(2025-02-14 08:30 UTC)
}

pub(crate) async fn open_store(directory: &tempfile::TempDir) -> Arc<FileStore> {
    let store = FileStore::open(directory.path().join("db.json"))
        .await
        .unwrap();
    Arc::new(store)
}

pub(crate) fn participant_named(name: &str) -> Participant {
    let date = get_dummy_date();
    Participant {
        id: Uuid::new_v4().into(),
        name: name.to_string(),
        did: format!("did:web:{name}.example.com"),
        host: "k8s-cluster-01.example.com".to_string(),
        status: ParticipantStatus::Active,
        description: String::new(),
        metadata: serde_json::json!({}),
        user: ParticipantUser {
            username: "admin".to_string(),
            metadata: serde_json::json!({}),
        },
        provisioning_started_at: date,
        last_operation_at: date,
        created_at: date,
        updated_at: date,
    }
}

pub(crate) fn credential_for(participant_id: ParticipantId) -> Credential {
    let date = get_dummy_date();
    Credential {
        id: Uuid::new_v4().into(),
        participant_id,
        format: "VC1_0_JWT".to_string(),
        credential_type: "MembershipCredential".to_string(),
        credential_id: Uuid::new_v4().to_string(),
        value: String::new(),
        metadata: serde_json::json!({ "status": "REQUESTED" }),
        created_at: date,
        updated_at: date,
    }
}

pub(crate) fn operation_for(participant_id: ParticipantId) -> Operation {
    Operation {
        id: Uuid::new_v4().into(),
        participant_id,
        event_type: OperationType::Provision,
        event_payload: serde_json::json!({ "message": "Provisioning completed" }),
        created_at: get_dummy_date(),
    }
}
