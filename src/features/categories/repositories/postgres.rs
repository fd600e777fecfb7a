use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::validation::like_pattern;

const CATEGORY_COLUMNS: &str = "id, name, description, color, created_at, updated_at";

/// PostgreSQL-backed category storage
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_name(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Category with name '{}' already exists", name),
        None => "Category with this name already exists".to_string(),
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories ORDER BY created_at, id LIMIT $1 OFFSET $2",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to count categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE name ILIKE $1 ORDER BY created_at, id",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to search categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get category {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (id, name, description, color)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(Uuid::now_v7())
            .bind(&category.name)
            .bind(&category.description)
            .bind(&category.color)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, duplicate_name(Some(&category.name))))
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                color = COALESCE($3, color),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(&changes.color)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, duplicate_name(changes.name.as_deref())))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
