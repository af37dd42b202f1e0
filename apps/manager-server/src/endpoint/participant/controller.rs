use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use shared_types::ParticipantId;

use super::dto::{
    CreateParticipantRequestRestDTO, ParticipantListQueryParamsRest, ParticipantResponseRestDTO,
    ParticipantStatsResponseRestDTO, UpdateParticipantRequestRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, ListOrErrorResponse, OkOrErrorResponse,
};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/participants",
    responses(ListOrErrorResponse<ParticipantResponseRestDTO>),
    params(ParticipantListQueryParamsRest),
    tag = "participant_management",
    summary = "List participants",
    description = "Returns one page of participants in onboarding order.",
)]
pub(crate) async fn get_participants(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<ParticipantListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> ListOrErrorResponse<ParticipantResponseRestDTO> {
    let (page, limit) = (query.page, query.limit.inner());
    let result = state
        .core
        .participant_service
        .get_participant_list(query.into())
        .await;
    ListOrErrorResponse::from_result(result, page, limit, state, "listing participants")
}

#[utoipa::path(
    get,
    path = "/v1/participants/stats",
    responses(OkOrErrorResponse<ParticipantStatsResponseRestDTO>),
    tag = "participant_management",
    summary = "Retrieve participant statistics",
    description = "Returns participant counts aggregated by lifecycle status.",
)]
pub(crate) async fn get_participant_stats(
    state: State<AppState>,
) -> OkOrErrorResponse<ParticipantStatsResponseRestDTO> {
    let result = state.core.participant_service.get_participant_stats().await;
    OkOrErrorResponse::from_result(result, state, "getting participant statistics")
}

#[utoipa::path(
    get,
    path = "/v1/participants/{id}",
    responses(OkOrErrorResponse<ParticipantResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id")
    ),
    tag = "participant_management",
    summary = "Retrieve participant",
    description = "Returns the full record of a single participant.",
)]
pub(crate) async fn get_participant(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<ParticipantResponseRestDTO> {
    let result = state.core.participant_service.get_participant(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting participant details")
}

#[utoipa::path(
    post,
    path = "/v1/participants",
    request_body = CreateParticipantRequestRestDTO,
    responses(CreatedOrErrorResponse<ParticipantResponseRestDTO>),
    tag = "participant_management",
    summary = "Onboard participant",
    description = indoc::formatdoc! {"
        Registers a new participant and starts provisioning it. The participant
        enters the `PROVISION_IN_PROGRESS` status, its DID is derived from the
        name and it is assigned to one of the configured deployment hosts.
    "},
)]
#[axum::debug_handler]
pub(crate) async fn post_participant(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateParticipantRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<ParticipantResponseRestDTO> {
    let result = state
        .core
        .participant_service
        .create_participant(request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating participant")
}

#[utoipa::path(
    patch,
    path = "/v1/participants/{id}",
    request_body = UpdateParticipantRequestRestDTO,
    responses(OkOrErrorResponse<ParticipantResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id")
    ),
    tag = "participant_management",
    summary = "Update participant",
    description = "Updates name, description or metadata of a participant. Renaming regenerates the DID.",
)]
#[axum::debug_handler]
pub(crate) async fn patch_participant(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateParticipantRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ParticipantResponseRestDTO> {
    let result = state
        .core
        .participant_service
        .update_participant(&id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating participant")
}

#[utoipa::path(
    delete,
    path = "/v1/participants/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = ParticipantId, Path, description = "Participant id")
    ),
    tag = "participant_management",
    summary = "Delete participant",
    description = "Deletes a participant together with its credentials and operations.",
)]
pub(crate) async fn delete_participant(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .participant_service
        .delete_participant(&id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting participant")
}
