use std::sync::Arc;

use manager_core::model::operation::{Operation, OperationType};
use manager_core::repository::operation_repository::OperationRepository;
use serde_json::json;
use shared_types::ParticipantId;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct OperationsDB {
    repository: Arc<dyn OperationRepository>,
}

impl OperationsDB {
    pub fn new(repository: Arc<dyn OperationRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        participant_id: ParticipantId,
        event_type: OperationType,
    ) -> Operation {
        let operation = Operation {
            id: Uuid::new_v4().into(),
            participant_id,
            event_type,
            event_payload: json!({ "message": "seeded event" }),
            created_at: OffsetDateTime::now_utc(),
        };

        self.repository
            .create_operation(operation.clone())
            .await
            .unwrap();

        operation
    }
}
