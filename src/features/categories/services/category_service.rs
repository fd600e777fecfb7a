use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

fn not_found() -> AppError {
    AppError::NotFound("Category not found".to_string())
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// One page of categories plus the total count
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<CategoryResponseDto>, i64)> {
        let categories = self.repository.list(limit, offset).await?;
        let total = self.repository.count().await?;

        Ok((categories.into_iter().map(Into::into).collect(), total))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.search_by_name(term).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    /// Create a category from an already validated request
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.repository.insert(dto.into_new_category()).await?;

        tracing::info!(
            "Category created: id={}, name={}",
            category.id,
            category.name
        );

        Ok(category.into())
    }

    /// Apply a partial update and return the record as stored afterwards
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self
            .repository
            .update(id, dto.into())
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Category updated: id={}", category.id);

        Ok(category.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
