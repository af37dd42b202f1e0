use manager_core::model::common::ListPagination;
use manager_core::model::credential::CredentialListQuery;
use shared_types::ParticipantId;

use super::dto::CredentialListQueryParamsRest;

pub(super) fn list_query_from_params(
    participant_id: ParticipantId,
    params: CredentialListQueryParamsRest,
) -> CredentialListQuery {
    CredentialListQuery {
        pagination: ListPagination {
            page: params.page,
            limit: params.limit.inner(),
        },
        participant_id,
        status: params.status,
    }
}
