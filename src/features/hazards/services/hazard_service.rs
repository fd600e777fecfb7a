use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::hazards::dtos::{
    CreateHazardDto, HazardResponseDto, PopulatedHazardDto, UpdateHazardDto,
};
use crate::features::hazards::repositories::HazardRepository;

/// Service for hazard operations
pub struct HazardService {
    repository: Arc<dyn HazardRepository>,
}

fn not_found() -> AppError {
    AppError::NotFound("Hazard not found".to_string())
}

impl HazardService {
    pub fn new(repository: Arc<dyn HazardRepository>) -> Self {
        Self { repository }
    }

    /// One page of hazards with categories resolved, plus the total count
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<PopulatedHazardDto>, i64)> {
        let hazards = self.repository.list(limit, offset).await?;
        let total = self.repository.count().await?;

        Ok((hazards.into_iter().map(Into::into).collect(), total))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<PopulatedHazardDto>> {
        let hazards = self.repository.search(term).await?;
        Ok(hazards.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<HazardResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    /// Create a hazard from an already validated request
    pub async fn create(&self, dto: CreateHazardDto) -> Result<HazardResponseDto> {
        let hazard = self.repository.insert(dto.into_new_hazard()).await?;

        tracing::info!(
            "Hazard created: id={}, category_id={}, severity={}",
            hazard.id,
            hazard.category_id,
            hazard.severity
        );

        Ok(hazard.into())
    }

    /// Apply a partial update and return the record as stored afterwards
    pub async fn update(&self, id: Uuid, dto: UpdateHazardDto) -> Result<HazardResponseDto> {
        let hazard = self
            .repository
            .update(id, dto.into())
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Hazard updated: id={}", hazard.id);

        Ok(hazard.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Hazard deleted: id={}", id);
        Ok(())
    }
}
