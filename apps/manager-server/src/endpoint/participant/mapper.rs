use manager_core::model::common::ListPagination;
use manager_core::model::participant::ParticipantListQuery;
use manager_core::service::participant::dto::CreateParticipantRequestDTO;
use one_dto_mapper::convert_inner;

use super::dto::{CreateParticipantRequestRestDTO, ParticipantListQueryParamsRest};

impl From<CreateParticipantRequestRestDTO> for CreateParticipantRequestDTO {
    fn from(value: CreateParticipantRequestRestDTO) -> Self {
        match value {
            CreateParticipantRequestRestDTO::Nested(request) => Self {
                name: request.participant.name,
                password: request.user.password,
                description: request.participant.description,
                metadata: request.participant.metadata,
                username: request.user.username,
                user_metadata: request.user.user_metadata,
            },
            CreateParticipantRequestRestDTO::Flat(request) => Self {
                name: request.name,
                password: request.password,
                description: request.description,
                metadata: request.metadata,
                username: None,
                user_metadata: None,
            },
        }
    }
}

impl From<ParticipantListQueryParamsRest> for ParticipantListQuery {
    fn from(value: ParticipantListQueryParamsRest) -> Self {
        Self {
            pagination: ListPagination {
                page: value.page,
                limit: value.limit.inner(),
            },
            status: convert_inner(value.status),
            search: value.search,
        }
    }
}
