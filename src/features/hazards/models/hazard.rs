use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::categories::models::Category;

/// Database model for hazard
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Hazard {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub severity: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hazard with its category resolved; `None` when the category no longer exists
#[derive(Debug, Clone)]
pub struct HazardWithCategory {
    pub hazard: Hazard,
    pub category: Option<Category>,
}

/// Validated input for inserting a hazard
#[derive(Debug, Clone)]
pub struct NewHazard {
    pub name: String,
    pub description: String,
    pub severity: i32,
    pub category_id: Uuid,
}

/// Fields to overwrite on update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct HazardChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub severity: Option<i32>,
    pub category_id: Option<Uuid>,
}
