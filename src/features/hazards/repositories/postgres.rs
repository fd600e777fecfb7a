use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::hazards::models::{Hazard, HazardChanges, HazardWithCategory, NewHazard};
use crate::features::hazards::repositories::HazardRepository;
use crate::shared::validation::like_pattern;

const HAZARD_COLUMNS: &str = "id, name, description, severity, category_id, created_at, updated_at";

/// Hazard columns plus the LEFT JOINed category columns (prefixed `category_`)
const POPULATED_SELECT: &str = r#"
    SELECT h.id, h.name, h.description, h.severity, h.category_id, h.created_at, h.updated_at,
           c.name AS category_name,
           c.description AS category_description,
           c.color AS category_color,
           c.created_at AS category_created_at,
           c.updated_at AS category_updated_at
    FROM hazards h
    LEFT JOIN categories c ON c.id = h.category_id
"#;

/// Row shape of `POPULATED_SELECT`; category columns are NULL when the
/// reference dangles
#[derive(Debug, FromRow)]
struct PopulatedHazardRow {
    id: Uuid,
    name: String,
    description: String,
    severity: i32,
    category_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_description: Option<String>,
    category_color: Option<String>,
    category_created_at: Option<DateTime<Utc>>,
    category_updated_at: Option<DateTime<Utc>>,
}

impl From<PopulatedHazardRow> for HazardWithCategory {
    fn from(row: PopulatedHazardRow) -> Self {
        let category = match (
            row.category_name,
            row.category_description,
            row.category_color,
            row.category_created_at,
            row.category_updated_at,
        ) {
            (Some(name), Some(description), Some(color), Some(created_at), Some(updated_at)) => {
                Some(Category {
                    id: row.category_id,
                    name,
                    description,
                    color,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            hazard: Hazard {
                id: row.id,
                name: row.name,
                description: row.description,
                severity: row.severity,
                category_id: row.category_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            category,
        }
    }
}

/// PostgreSQL-backed hazard storage
pub struct PgHazardRepository {
    pool: PgPool,
}

impl PgHazardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HazardRepository for PgHazardRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<HazardWithCategory>> {
        let query = format!(
            "{} ORDER BY h.created_at, h.id LIMIT $1 OFFSET $2",
            POPULATED_SELECT
        );

        let rows: Vec<PopulatedHazardRow> = sqlx::query_as(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to list hazards: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM hazards")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to count hazards: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn search(&self, term: &str) -> Result<Vec<HazardWithCategory>> {
        let query = format!(
            "{} WHERE h.name ILIKE $1 OR h.description ILIKE $1 ORDER BY h.created_at, h.id",
            POPULATED_SELECT
        );

        let rows: Vec<PopulatedHazardRow> = sqlx::query_as(&query)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to search hazards: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hazard>> {
        let query = format!("SELECT {} FROM hazards WHERE id = $1", HAZARD_COLUMNS);

        sqlx::query_as::<_, Hazard>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get hazard {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, hazard: NewHazard) -> Result<Hazard> {
        let query = format!(
            r#"
            INSERT INTO hazards (id, name, description, severity, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            HAZARD_COLUMNS
        );

        sqlx::query_as::<_, Hazard>(&query)
            .bind(Uuid::now_v7())
            .bind(&hazard.name)
            .bind(&hazard.description)
            .bind(hazard.severity)
            .bind(hazard.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to create hazard: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: Uuid, changes: HazardChanges) -> Result<Option<Hazard>> {
        let query = format!(
            r#"
            UPDATE hazards
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                severity = COALESCE($3, severity),
                category_id = COALESCE($4, category_id),
                updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            HAZARD_COLUMNS
        );

        sqlx::query_as::<_, Hazard>(&query)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(changes.severity)
            .bind(changes.category_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to update hazard {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM hazards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to delete hazard {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
