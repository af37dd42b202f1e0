use std::future;

use axum::Json;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::build_info;

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information for the participant manager.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    Json::from(json!({
        "target": String::from(build_info::BUILD_RUST_CHANNEL),
        "build_time": String::from(build_info::BUILD_TIME),
        "branch": String::from(build_info::BRANCH),
        "tag": String::from(build_info::TAG),
        "commit": String::from(build_info::COMMIT_HASH),
        "rust_version": String::from(build_info::RUST_VERSION),
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub(crate) fn get_openapi_yaml<S>(openapi: &utoipa::openapi::OpenApi) -> impl Handler<((),), S> {
    let yaml = openapi.to_yaml().unwrap();
    move || future::ready((StatusCode::OK, yaml.clone()).into_response())
}
