use manager_core::model::common::ListPagination;
use manager_core::model::operation::OperationListQuery;
use shared_types::ParticipantId;

use super::dto::OperationListQueryParamsRest;

pub(super) fn list_query_from_params(
    participant_id: ParticipantId,
    params: OperationListQueryParamsRest,
) -> OperationListQuery {
    OperationListQuery {
        pagination: ListPagination {
            page: params.page,
            limit: params.limit.inner(),
        },
        participant_id,
    }
}
