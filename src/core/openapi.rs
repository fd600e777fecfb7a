use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::hazards::{dtos as hazards_dtos, handlers as hazards_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse, Paginated, Pagination};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::search_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Hazards
        hazards_handlers::list_hazards,
        hazards_handlers::search_hazards,
        hazards_handlers::get_hazard,
        hazards_handlers::create_hazard,
        hazards_handlers::update_hazard,
        hazards_handlers::delete_hazard,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            Pagination,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            Paginated<categories_dtos::CategoryResponseDto>,
            // Hazards
            hazards_dtos::CreateHazardDto,
            hazards_dtos::UpdateHazardDto,
            hazards_dtos::HazardResponseDto,
            hazards_dtos::PopulatedHazardDto,
            Paginated<hazards_dtos::PopulatedHazardDto>,
        )
    ),
    tags(
        (name = "categories", description = "Hazard categories"),
        (name = "hazards", description = "Hazards and their severity"),
    ),
    info(
        title = "Hazard Registry API",
        version = "0.1.0",
        description = "CRUD API for hazards and hazard categories",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
