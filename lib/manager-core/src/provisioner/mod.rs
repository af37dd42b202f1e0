use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use shared_types::ParticipantId;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::core_config::ProvisionerConfig;
use crate::model::operation::{Operation, OperationType};
use crate::model::participant::{Participant, ParticipantStatus};
use crate::repository::operation_repository::OperationRepository;
use crate::repository::participant_repository::ParticipantRepository;
use crate::service::error::{BusinessLogicError, ServiceError};


/// Background worker that settles participants stuck in a transitional
/// status once the configured settle time has elapsed.
///
/// Provisioning participants become [`ParticipantStatus::Active`],
/// deprovisioning ones become [`ParticipantStatus::DeprovisionCompleted`].
/// Every settled participant gets a matching operation record.
pub struct ProvisioningWorker {
    participant_repository: Arc<dyn ParticipantRepository>,
    operation_repository: Arc<dyn OperationRepository>,
    config: ProvisionerConfig,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningSweepSummary {
    pub advanced_participant_ids: Vec<ParticipantId>,
    pub total_checked: u64,
}

impl ProvisioningWorker {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        operation_repository: Arc<dyn OperationRepository>,
        config: ProvisionerConfig,
    ) -> Self {
        Self {
            participant_repository,
            operation_repository,
            config,
        }
    }

    /// Sweeps on the configured interval until the surrounding task is dropped.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.config.interval.unsigned_abs());
        loop {
            ticker.tick().await;

            match self.advance_pending().await {
                Ok(summary) if !summary.advanced_participant_ids.is_empty() => {
                    tracing::info!(
                        advanced = summary.advanced_participant_ids.len(),
                        checked = summary.total_checked,
                        "provisioning sweep settled participants"
                    );
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(%error, "provisioning sweep failed");
                }
            }
        }
    }

    /// Advances every participant whose transitional status has been held for
    /// at least the settle time.
    pub async fn advance_pending(&self) -> Result<ProvisioningSweepSummary, ServiceError> {
        let now = OffsetDateTime::now_utc();
        let mut summary = ProvisioningSweepSummary::default();

        for (pending, settled) in [
            (
                ParticipantStatus::ProvisionInProgress,
                ParticipantStatus::Active,
            ),
            (
                ParticipantStatus::DeprovisionInProgress,
                ParticipantStatus::DeprovisionCompleted,
            ),
        ] {
            let participants = self
                .participant_repository
                .get_participants_in_status(pending)
                .await?;

            for participant in participants {
                summary.total_checked += 1;

                if now - participant.provisioning_started_at < self.config.settle_time {
                    continue;
                }

                self.settle(&participant, settled, now).await?;
                summary.advanced_participant_ids.push(participant.id);
            }
        }

        Ok(summary)
    }

    async fn settle(
        &self,
        participant: &Participant,
        to: ParticipantStatus,
        now: OffsetDateTime,
    ) -> Result<(), ServiceError> {
        if !participant.status.can_transition_to(to) {
            return Err(BusinessLogicError::StatusTransitionNotAllowed {
                from: participant.status,
                to,
            }
            .into());
        }

        self.participant_repository
            .set_participant_status(&participant.id, to, now)
            .await?;

        let (event_type, message) = match to {
            ParticipantStatus::Active => (OperationType::Provision, "Provisioning completed"),
            _ => (OperationType::Deprovision, "Deprovisioning completed"),
        };

        self.operation_repository
            .create_operation(Operation {
                id: Uuid::new_v4().into(),
                participant_id: participant.id,
                event_type,
                event_payload: json!({ "message": message }),
                created_at: now,
            })
            .await?;

        Ok(())
    }
}
