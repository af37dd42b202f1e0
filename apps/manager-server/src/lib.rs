use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod middleware;
pub mod router;
pub mod serialize;
pub mod build_info {
    use shadow_rs::shadow;

    shadow!(build);

    pub use build::*;

    /// Version stamped by the release pipeline, falls back to the
    /// package version plus commit when unset.
    pub const APP_VERSION: Option<&str> = option_env!("APP_VERSION");
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub store_path: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `error` message in 5xx responses
    pub hide_error_response_cause: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}
