use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::app::{api_routes, AppServices};
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::CategoryRepository;
use crate::features::hazards::models::{Hazard, HazardChanges, HazardWithCategory, NewHazard};
use crate::features::hazards::HazardRepository;

/// In-memory store implementing both repositories, kept in insertion order
#[derive(Default)]
pub struct InMemoryStore {
    categories: RwLock<Vec<Category>>,
    hazards: RwLock<Vec<Hazard>>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn page<T: Clone>(items: &[T], limit: i64, offset: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

fn conflict(name: &str) -> AppError {
    AppError::Conflict(format!("Category with name '{}' already exists", name))
}

impl InMemoryStore {
    async fn populate(&self, hazards: Vec<Hazard>) -> Vec<HazardWithCategory> {
        let categories = self.categories.read().await;
        hazards
            .into_iter()
            .map(|hazard| {
                let category = categories
                    .iter()
                    .find(|c| c.id == hazard.category_id)
                    .cloned();
                HazardWithCategory { hazard, category }
            })
            .collect()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Category>> {
        Ok(page(&self.categories.read().await, limit, offset))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.categories.read().await.len() as i64)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .filter(|c| contains_ignore_case(&c.name, term))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.name == category.name) {
            return Err(conflict(&category.name));
        }

        let now = Utc::now();
        let created = Category {
            id: Uuid::now_v7(),
            name: category.name,
            description: category.description,
            color: category.color,
            created_at: now,
            updated_at: now,
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;
        if let Some(name) = &changes.name {
            if categories.iter().any(|c| c.id != id && &c.name == name) {
                return Err(conflict(name));
            }
        }

        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            category.name = name;
        }
        if let Some(description) = changes.description {
            category.description = description;
        }
        if let Some(color) = changes.color {
            category.color = color;
        }
        category.updated_at = Utc::now();

        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }
}

#[async_trait]
impl HazardRepository for InMemoryStore {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<HazardWithCategory>> {
        let hazards = page(&self.hazards.read().await, limit, offset);
        Ok(self.populate(hazards).await)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.hazards.read().await.len() as i64)
    }

    async fn search(&self, term: &str) -> Result<Vec<HazardWithCategory>> {
        let hazards: Vec<Hazard> = self
            .hazards
            .read()
            .await
            .iter()
            .filter(|h| {
                contains_ignore_case(&h.name, term) || contains_ignore_case(&h.description, term)
            })
            .cloned()
            .collect();
        Ok(self.populate(hazards).await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hazard>> {
        Ok(self
            .hazards
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn insert(&self, hazard: NewHazard) -> Result<Hazard> {
        let now = Utc::now();
        let created = Hazard {
            id: Uuid::now_v7(),
            name: hazard.name,
            description: hazard.description,
            severity: hazard.severity,
            category_id: hazard.category_id,
            created_at: now,
            updated_at: now,
        };
        self.hazards.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: HazardChanges) -> Result<Option<Hazard>> {
        let mut hazards = self.hazards.write().await;
        let Some(hazard) = hazards.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            hazard.name = name;
        }
        if let Some(description) = changes.description {
            hazard.description = description;
        }
        if let Some(severity) = changes.severity {
            hazard.severity = severity;
        }
        if let Some(category_id) = changes.category_id {
            hazard.category_id = category_id;
        }
        hazard.updated_at = Utc::now();

        Ok(Some(hazard.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut hazards = self.hazards.write().await;
        let before = hazards.len();
        hazards.retain(|h| h.id != id);
        Ok(hazards.len() < before)
    }
}

/// API router backed by a fresh in-memory store
pub fn test_router() -> Router {
    let store = Arc::new(InMemoryStore::default());
    api_routes(&AppServices::new(store.clone(), store))
}

/// axum-test server over [`test_router`]
pub fn test_server() -> TestServer {
    TestServer::new(test_router()).expect("failed to start test server")
}
