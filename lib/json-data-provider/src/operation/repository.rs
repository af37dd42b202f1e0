use manager_core::model::common::GetListResponse;
use manager_core::model::operation::{Operation, OperationListQuery};
use manager_core::repository::error::DataLayerError;
use manager_core::repository::operation_repository::OperationRepository;
use shared_types::OperationId;

use super::OperationProvider;

#[async_trait::async_trait]
impl OperationRepository for OperationProvider {
    async fn create_operation(&self, operation: Operation) -> Result<OperationId, DataLayerError> {
        self.store
            .write(|document| {
                let id = operation.id;
                document.operations.push(operation.into());
                Ok(id)
            })
            .await
    }

    async fn get_operation_list(
        &self,
        query: OperationListQuery,
    ) -> Result<GetListResponse<Operation>, DataLayerError> {
        let response = self
            .store
            .read(|document| {
                let filtered: Vec<_> = document
                    .operations
                    .iter()
                    .filter(|record| record.participant_id == query.participant_id)
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
}
