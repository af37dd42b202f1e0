#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Method, Request, Response, header};
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Extension, Router};
use json_data_provider::{DataLayer, FileStore};
use manager_core::ManagerCore;
use manager_core::config::core_config::AppConfig;
use manager_core::provisioner::ProvisioningWorker;
use manager_core::repository::DataRepository;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, credential, misc, operation, participant, tenant};
use crate::middleware::get_http_request_context;
use crate::{ServerConfig, build_info, dto};

pub(crate) struct InternalAppState {
    pub core: ManagerCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    store: Arc<FileStore>,
) {
    listener.set_nonblocking(true).unwrap();

    let data_provider: Arc<dyn DataRepository> = Arc::new(DataLayer::build(store));
    let provisioner_config = config.core.provisioner.clone();

    let core =
        ManagerCore::new(data_provider.clone(), config.core).expect("Failed to parse config");

    if provisioner_config.enabled {
        info!("Starting provisioning worker");
        let worker = ProvisioningWorker::new(
            data_provider.get_participant_repository(),
            data_provider.get_operation_repository(),
            provisioner_config,
        );
        tokio::spawn(worker.run());
    }

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let openapi_documentation = gen_openapi_documentation();

    let endpoints = Router::new()
        .route(
            "/v1/participants",
            get(participant::controller::get_participants)
                .post(participant::controller::post_participant),
        )
        .route(
            "/v1/participants/stats",
            get(participant::controller::get_participant_stats),
        )
        .route(
            "/v1/participants/{id}",
            get(participant::controller::get_participant)
                .patch(participant::controller::patch_participant)
                .delete(participant::controller::delete_participant),
        )
        .route(
            "/v1/participants/{id}/credentials",
            get(credential::controller::get_credentials)
                .post(credential::controller::post_credentials)
                .put(credential::controller::put_credentials),
        )
        .route(
            "/api/v1/participants/{id}/credentials/{credentialId}",
            get(credential::controller::get_credential),
        )
        .route(
            "/v1/participants/{id}/operations",
            get(operation::controller::get_operations),
        )
        .route(
            "/v1/tenants/me",
            get(tenant::controller::get_current_tenant),
        )
        .route("/v1/tenants/{id}", put(tenant::controller::put_tenant));

    let technical_endpoints = Router::new()
        .route("/build-info", get(misc::get_build_info))
        .route("/health", get(misc::health_check));

    // Mirrors the headers the management frontend relies on, including the
    // exposed pagination headers.
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([
            HeaderName::from_static("x-total"),
            HeaderName::from_static("x-page"),
            HeaderName::from_static("x-limit"),
        ]);

    let mut router = Router::new().merge(endpoints).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = "manager-server",
                    RequestId = context.request_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // override default on_failure handler
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router
            .merge(
                SwaggerUi::new("/swagger-ui")
                    .url("/api-docs/openapi.json", openapi_documentation.clone()),
            )
            .route(
                "/api-docs/openapi.yaml",
                get(misc::get_openapi_yaml(&openapi_documentation)),
            );
    }

    if config.enable_server_info {
        router = router.merge(technical_endpoints);
    }

    router
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::participant::controller::get_participants,
            endpoint::participant::controller::get_participant_stats,
            endpoint::participant::controller::get_participant,
            endpoint::participant::controller::post_participant,
            endpoint::participant::controller::patch_participant,
            endpoint::participant::controller::delete_participant,

            endpoint::credential::controller::get_credentials,
            endpoint::credential::controller::get_credential,
            endpoint::credential::controller::post_credentials,
            endpoint::credential::controller::put_credentials,

            endpoint::operation::controller::get_operations,

            endpoint::tenant::controller::get_current_tenant,
            endpoint::tenant::controller::put_tenant,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
        ),
        components(
            schemas(
                endpoint::participant::dto::CreateParticipantRequestRestDTO,
                endpoint::participant::dto::CreateParticipantNestedRequestRestDTO,
                endpoint::participant::dto::CreateParticipantFlatRequestRestDTO,
                endpoint::participant::dto::ParticipantPayloadRestDTO,
                endpoint::participant::dto::UserPayloadRestDTO,
                endpoint::participant::dto::UpdateParticipantRequestRestDTO,
                endpoint::participant::dto::ParticipantResponseRestDTO,
                endpoint::participant::dto::ParticipantUserResponseRestDTO,
                endpoint::participant::dto::ParticipantStatusRestEnum,
                endpoint::participant::dto::ParticipantStatsResponseRestDTO,

                endpoint::credential::dto::CredentialRequestRestDTO,
                endpoint::credential::dto::CredentialDefinitionRestDTO,
                endpoint::credential::dto::ReplaceCredentialsRequestRestDTO,
                endpoint::credential::dto::ReplaceCredentialRestDTO,
                endpoint::credential::dto::CredentialResponseRestDTO,
                endpoint::credential::dto::CredentialListItemResponseRestDTO,
                endpoint::credential::dto::CredentialRequestResponseRestDTO,
                endpoint::credential::dto::CredentialRequestItemRestDTO,
                endpoint::credential::dto::CredentialStatusRestEnum,

                endpoint::operation::dto::OperationResponseRestDTO,
                endpoint::operation::dto::OperationTypeRestEnum,

                endpoint::tenant::dto::TenantResponseRestDTO,
                endpoint::tenant::dto::TenantMetadataRestDTO,
                endpoint::tenant::dto::TenantBrandingRestDTO,
                endpoint::tenant::dto::UpdateTenantRequestRestDTO,
                endpoint::tenant::dto::UpdateTenantMetadataRestDTO,
                endpoint::tenant::dto::UpdateTenantResponseRestDTO,
                endpoint::tenant::dto::TenantUpdateRejectionRestDTO,

                dto::error::ErrorResponseRestDTO,

                shared_types::ParticipantId,
                shared_types::CredentialId,
                shared_types::OperationId,
                shared_types::TenantId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "participant_management", description = "Participant management"),
            (name = "credential_management", description = "Credential management"),
            (name = "operation_management", description = "Operation log"),
            (name = "tenant_management", description = "Tenant management"),
        ),
    )]
    struct ApiDoc;

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    build_info::APP_VERSION
        .map(Into::into)
        .unwrap_or_else(|| format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
