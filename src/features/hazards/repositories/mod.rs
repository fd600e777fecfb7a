use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::hazards::models::{Hazard, HazardChanges, HazardWithCategory, NewHazard};

mod postgres;

pub use postgres::PgHazardRepository;

/// Storage operations for hazards.
///
/// `list` and `search` resolve each hazard's category in the same query.
#[async_trait]
pub trait HazardRepository: Send + Sync {
    /// One page of hazards, ordered by creation time then id
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<HazardWithCategory>>;

    /// Total number of hazards
    async fn count(&self) -> Result<i64>;

    /// Hazards whose name or description contains `term`, ignoring case
    async fn search(&self, term: &str) -> Result<Vec<HazardWithCategory>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hazard>>;

    async fn insert(&self, hazard: NewHazard) -> Result<Hazard>;

    /// Apply `changes` and return the updated record, `None` if `id` is unknown
    async fn update(&self, id: Uuid, changes: HazardChanges) -> Result<Option<Hazard>>;

    /// Delete by id, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
