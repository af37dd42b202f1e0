use manager_core::model::common::GetListResponse;
use manager_core::model::credential::{Credential, CredentialListQuery};
use manager_core::repository::credential_repository::CredentialRepository;
use manager_core::repository::error::DataLayerError;
use serde_json::Value;
use shared_types::{CredentialId, ParticipantId};

use super::CredentialProvider;
use crate::document::CredentialRecord;

#[async_trait::async_trait]
impl CredentialRepository for CredentialProvider {
    async fn create_credentials(
        &self,
        credentials: Vec<Credential>,
    ) -> Result<(), DataLayerError> {
        self.store
            .write(|document| {
                document
                    .credentials
                    .extend(credentials.into_iter().map(CredentialRecord::from));
                Ok(())
            })
            .await
    }

    async fn get_credential(
        &self,
        participant_id: &ParticipantId,
        id: &CredentialId,
    ) -> Result<Option<Credential>, DataLayerError> {
        let credential = self
            .store
            .read(|document| {
                document
                    .credentials
                    .iter()
                    .find(|record| record.id == *id && record.participant_id == *participant_id)
                    .cloned()
            })
            .await;

        Ok(credential.map(Into::into))
    }

    async fn get_credential_list(
        &self,
        query: CredentialListQuery,
    ) -> Result<GetListResponse<Credential>, DataLayerError> {
        let response = self
            .store
            .read(|document| {
                let filtered: Vec<_> = document
                    .credentials
                    .iter()
                    .filter(|record| record.participant_id == query.participant_id)
                    .filter(|record| {
                        query.status.as_deref().is_none_or(|status| {
                            record.metadata.get("status").and_then(Value::as_str)
                                == Some(status)
                        })
                    })
                    .collect();

                GetListResponse {
                    total_items: filtered.len() as u64,
                    values: query
                        .pagination
                        .page_of(&filtered)
                        .iter()
                        .map(|record| (*record).clone().into())
                        .collect(),
                }
            })
            .await;

        Ok(response)
    }

    async fn replace_credentials(
        &self,
        participant_id: &ParticipantId,
        credentials: Vec<Credential>,
    ) -> Result<Vec<Credential>, DataLayerError> {
        self.store
            .write(|document| {
                document
                    .credentials
                    .retain(|record| record.participant_id != *participant_id);
                document.credentials.extend(
                    credentials
                        .iter()
                        .cloned()
                        .map(CredentialRecord::from),
                );
                Ok(credentials)
            })
            .await
    }
}
