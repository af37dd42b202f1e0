use shared_types::OperationId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::operation::{Operation, OperationListQuery};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait OperationRepository: Send + Sync {
    async fn create_operation(&self, operation: Operation) -> Result<OperationId, DataLayerError>;

    async fn get_operation_list(
        &self,
        query: OperationListQuery,
    ) -> Result<GetListResponse<Operation>, DataLayerError>;
}
