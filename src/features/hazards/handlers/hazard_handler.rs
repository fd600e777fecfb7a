use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::hazards::dtos::{
    CreateHazardDto, HazardResponseDto, PopulatedHazardDto, UpdateHazardDto,
};
use crate::features::hazards::services::HazardService;
use crate::shared::types::{ErrorResponse, ListQuery, MessageResponse, Paginated, SearchQuery};
use crate::shared::validation::validate_dto;

/// List hazards with their category resolved
#[utoipa::path(
    get,
    path = "/api/hazards",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of hazards", body = Paginated<PopulatedHazardDto>),
    ),
    tag = "hazards"
)]
pub async fn list_hazards(
    State(service): State<Arc<HazardService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<Paginated<PopulatedHazardDto>>> {
    let (limit, offset) = (query.limit(), query.offset());
    let (hazards, total) = service.list(limit, offset).await?;

    Ok(Json(Paginated::new(hazards, total, limit, offset)))
}

/// Search hazards by name or description (case-insensitive substring)
#[utoipa::path(
    get,
    path = "/api/hazards/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching hazards", body = Vec<PopulatedHazardDto>),
        (status = 400, description = "Missing search query", body = ErrorResponse)
    ),
    tag = "hazards"
)]
pub async fn search_hazards(
    State(service): State<Arc<HazardService>>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<Vec<PopulatedHazardDto>>> {
    let hazards = service.search(query.term()?).await?;
    Ok(Json(hazards))
}

/// Get a hazard by ID
#[utoipa::path(
    get,
    path = "/api/hazard/{id}",
    params(
        ("id" = Uuid, Path, description = "Hazard ID")
    ),
    responses(
        (status = 200, description = "Hazard found", body = HazardResponseDto),
        (status = 404, description = "Hazard not found", body = ErrorResponse)
    ),
    tag = "hazards"
)]
pub async fn get_hazard(
    State(service): State<Arc<HazardService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<HazardResponseDto>> {
    let hazard = service.get_by_id(id).await?;
    Ok(Json(hazard))
}

/// Create a hazard
///
/// Responds 200 rather than 201; clients of this endpoint rely on it.
#[utoipa::path(
    post,
    path = "/api/hazards",
    request_body = CreateHazardDto,
    responses(
        (status = 200, description = "Hazard created", body = HazardResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "hazards"
)]
pub async fn create_hazard(
    State(service): State<Arc<HazardService>>,
    AppJson(dto): AppJson<CreateHazardDto>,
) -> Result<Json<HazardResponseDto>> {
    validate_dto(&dto)?;

    let hazard = service.create(dto).await?;
    Ok(Json(hazard))
}

/// Update a hazard; omitted fields keep their current value
#[utoipa::path(
    put,
    path = "/api/hazard/{id}",
    params(
        ("id" = Uuid, Path, description = "Hazard ID")
    ),
    request_body = UpdateHazardDto,
    responses(
        (status = 200, description = "Hazard after the update", body = HazardResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Hazard not found", body = ErrorResponse)
    ),
    tag = "hazards"
)]
pub async fn update_hazard(
    State(service): State<Arc<HazardService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateHazardDto>,
) -> Result<Json<HazardResponseDto>> {
    validate_dto(&dto)?;

    let hazard = service.update(id, dto).await?;
    Ok(Json(hazard))
}

/// Delete a hazard
#[utoipa::path(
    delete,
    path = "/api/hazard/{id}",
    params(
        ("id" = Uuid, Path, description = "Hazard ID")
    ),
    responses(
        (status = 200, description = "Hazard deleted", body = MessageResponse),
        (status = 404, description = "Hazard not found", body = ErrorResponse)
    ),
    tag = "hazards"
)]
pub async fn delete_hazard(
    State(service): State<Arc<HazardService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Hazard deleted successfully")))
}
