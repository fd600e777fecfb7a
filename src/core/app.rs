use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware::{self, MakeRequestUuid, MakeSpanWithRequestId};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService, PgCategoryRepository,
};
use crate::features::hazards::{
    routes as hazards_routes, HazardRepository, HazardService, PgHazardRepository,
};

/// Services shared by the request handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub hazards: Arc<HazardService>,
}

impl AppServices {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        hazards: Arc<dyn HazardRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(categories)),
            hazards: Arc::new(HazardService::new(hazards)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgHazardRepository::new(pool)),
        )
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API and health routes without docs or middleware
pub fn api_routes(services: &AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(hazards_routes::routes(Arc::clone(&services.hazards)))
        .route("/health", get(health_check))
}

/// Full application: API routes, Swagger UI and the HTTP middleware stack
pub fn build_app(services: &AppServices, config: &Config) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(&config.swagger).modify(&mut openapi);

    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);

    // Outermost first: assign the request id, trace with it, echo it back
    let http_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            middleware::REQUEST_ID_HEADER,
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(middleware::REQUEST_ID_HEADER))
        .layer(middleware::cors_layer(&config.app.cors_allowed_origins));

    Router::new()
        .merge(swagger)
        .merge(api_routes(services))
        .layer(http_layers)
}
