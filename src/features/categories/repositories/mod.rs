use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};

mod postgres;

pub use postgres::PgCategoryRepository;

/// Storage operations for categories.
///
/// Listing order is stable (creation time, then id) so that offset pagination
/// does not skip or repeat records between pages.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// One page of categories
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Category>>;

    /// Total number of categories
    async fn count(&self) -> Result<i64>;

    /// Categories whose name contains `term`, ignoring case
    async fn search_by_name(&self, term: &str) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    /// Insert a category; a duplicate name yields `AppError::Conflict`
    async fn insert(&self, category: NewCategory) -> Result<Category>;

    /// Apply `changes` and return the updated record, `None` if `id` is unknown
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    /// Delete by id, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
