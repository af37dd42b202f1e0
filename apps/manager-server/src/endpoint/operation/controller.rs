use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use shared_types::ParticipantId;

use super::dto::{OperationListQueryParamsRest, OperationResponseRestDTO};
use super::mapper;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::ListOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/participants/{id}/operations",
    responses(ListOrErrorResponse<OperationResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id"),
        OperationListQueryParamsRest,
    ),
    tag = "operation_management",
    summary = "List operations",
    description = "Returns one page of the participant's recorded lifecycle events.",
)]
pub(crate) async fn get_operations(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
    WithRejection(Query(query), _): WithRejection<
        Query<OperationListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> ListOrErrorResponse<OperationResponseRestDTO> {
    let (page, limit) = (query.page, query.limit.inner());
    let result = state
        .core
        .operation_service
        .get_operation_list(mapper::list_query_from_params(id, query))
        .await;
    ListOrErrorResponse::from_result(result, page, limit, state, "listing operations")
}
