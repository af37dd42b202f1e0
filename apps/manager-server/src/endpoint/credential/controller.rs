use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use shared_types::{CredentialId, ParticipantId};

use super::dto::{
    CredentialListItemResponseRestDTO, CredentialListQueryParamsRest, CredentialRequestRestDTO,
    CredentialRequestResponseRestDTO, CredentialResponseRestDTO, ReplaceCredentialsRequestRestDTO,
};
use super::mapper;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, ListOrErrorResponse, OkOrErrorResponse, VecResponse,
};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/participants/{id}/credentials",
    responses(ListOrErrorResponse<CredentialListItemResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id"),
        CredentialListQueryParamsRest,
    ),
    tag = "credential_management",
    summary = "List credentials",
    description = "Returns one page of the participant's credentials in the list projection.",
)]
pub(crate) async fn get_credentials(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
    WithRejection(Query(query), _): WithRejection<
        Query<CredentialListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> ListOrErrorResponse<CredentialListItemResponseRestDTO> {
    let (page, limit) = (query.page, query.limit.inner());
    let result = state
        .core
        .credential_service
        .get_credential_list(mapper::list_query_from_params(id, query))
        .await;
    ListOrErrorResponse::from_result(result, page, limit, state, "listing credentials")
}

#[utoipa::path(
    get,
    path = "/api/v1/participants/{id}/credentials/{credentialId}",
    responses(OkOrErrorResponse<CredentialResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id"),
        ("credentialId" = CredentialId, Path, description = "Credential id"),
    ),
    tag = "credential_management",
    summary = "Retrieve credential",
    description = "Returns the full stored record of a single credential. Unlike the other operations this route carries the `/api` prefix, kept for frontend compatibility.",
)]
pub(crate) async fn get_credential(
    state: State<AppState>,
    WithRejection(Path((id, credential_id)), _): WithRejection<
        Path<(ParticipantId, CredentialId)>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<CredentialResponseRestDTO> {
    let result = state
        .core
        .credential_service
        .get_credential(&id, &credential_id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting credential details")
}

#[utoipa::path(
    post,
    path = "/v1/participants/{id}/credentials",
    request_body = CredentialRequestRestDTO,
    responses(CreatedOrErrorResponse<CredentialRequestResponseRestDTO>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id")
    ),
    tag = "credential_management",
    summary = "Request credentials",
    description = indoc::formatdoc! {"
        Requests issuance of one or more credentials for the participant. The
        whole batch is validated before anything is stored; on success every
        definition becomes a `REQUESTED` record under a shared request id.
    "},
)]
#[axum::debug_handler]
pub(crate) async fn post_credentials(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<CredentialRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CredentialRequestResponseRestDTO> {
    let result = state
        .core
        .credential_service
        .request_credentials(&id, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "requesting credentials")
}

#[utoipa::path(
    put,
    path = "/v1/participants/{id}/credentials",
    request_body = ReplaceCredentialsRequestRestDTO,
    responses(OkOrErrorResponse<VecResponse<CredentialResponseRestDTO>>),
    params(
        ("id" = ParticipantId, Path, description = "Participant id")
    ),
    tag = "credential_management",
    summary = "Replace credentials",
    description = "Replaces the participant's whole credential set with the supplied one and returns the new stored records.",
)]
#[axum::debug_handler]
pub(crate) async fn put_credentials(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ParticipantId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<ReplaceCredentialsRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VecResponse<CredentialResponseRestDTO>> {
    let result = state
        .core
        .credential_service
        .replace_credentials(&id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "replacing credentials")
}
