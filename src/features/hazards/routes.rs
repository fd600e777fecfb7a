use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hazards::handlers;
use crate::features::hazards::services::HazardService;

/// Create routes for the hazards feature
pub fn routes(service: Arc<HazardService>) -> Router {
    Router::new()
        .route(
            "/api/hazards",
            get(handlers::list_hazards).post(handlers::create_hazard),
        )
        .route("/api/hazards/search", get(handlers::search_hazards))
        .route(
            "/api/hazard/{id}",
            get(handlers::get_hazard)
                .put(handlers::update_hazard)
                .delete(handlers::delete_hazard),
        )
        .with_state(service)
}
