use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use manager_core::service::error::{EntityNotFoundError, ServiceError};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body shared by all non-2xx responses.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    #[schema(example = "Participant not found")]
    pub error: String,
}

impl ErrorResponseRestDTO {
    pub fn new(message: impl Into<String>) -> ErrorResponseRestDTO {
        ErrorResponseRestDTO {
            error: message.into(),
        }
    }

    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.error = "Internal server error".to_string();
        }

        self
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        // lookups by id report a fixed message without leaking the id
        let message = match error {
            ServiceError::EntityNotFound(EntityNotFoundError::Participant(_)) => {
                "Participant not found".to_string()
            }
            ServiceError::EntityNotFound(EntityNotFoundError::Credential(_)) => {
                "Credential not found".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponseRestDTO { error: message }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self {
                    error: value.body_text(),
                }
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(QueryRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
