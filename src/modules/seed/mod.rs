//! One-shot seeding of the sample categories and hazards.
//!
//! Existing hazards and categories are wiped and replaced inside a single
//! transaction, so a failure part-way leaves the previous data intact.

mod data;

use std::collections::HashMap;

use anyhow::{anyhow, Context};
use sqlx::PgPool;
use uuid::Uuid;

use data::{CATEGORIES, HAZARDS};

/// Row counts written by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub hazards: usize,
}

fn resolve_category(ids: &HashMap<&str, Uuid>, name: &str) -> anyhow::Result<Uuid> {
    ids.get(name)
        .copied()
        .ok_or_else(|| anyhow!("Seed hazard references unknown category '{}'", name))
}

/// Replace all categories and hazards with the fixed sample data
pub async fn run(pool: &PgPool) -> anyhow::Result<SeedSummary> {
    let mut tx = pool.begin().await.context("Failed to start transaction")?;

    tracing::info!("Clearing existing data...");
    sqlx::query("DELETE FROM hazards")
        .execute(&mut *tx)
        .await
        .context("Failed to clear hazards")?;
    sqlx::query("DELETE FROM categories")
        .execute(&mut *tx)
        .await
        .context("Failed to clear categories")?;

    tracing::info!("Seeding categories...");
    let mut category_ids = HashMap::with_capacity(CATEGORIES.len());
    for category in CATEGORIES {
        let id = Uuid::now_v7();
        sqlx::query("INSERT INTO categories (id, name, description, color) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(category.name)
            .bind(category.description)
            .bind(category.color)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to insert category '{}'", category.name))?;
        category_ids.insert(category.name, id);
    }
    tracing::info!("{} categories seeded", category_ids.len());

    tracing::info!("Seeding hazards...");
    for hazard in HAZARDS {
        let category_id = resolve_category(&category_ids, hazard.category)?;
        sqlx::query(
            "INSERT INTO hazards (id, name, description, severity, category_id) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::now_v7())
        .bind(hazard.name)
        .bind(hazard.description)
        .bind(hazard.severity)
        .bind(category_id)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to insert hazard '{}'", hazard.name))?;
    }
    tracing::info!("{} hazards seeded", HAZARDS.len());

    tx.commit().await.context("Failed to commit seed data")?;

    Ok(SeedSummary {
        categories: CATEGORIES.len(),
        hazards: HAZARDS.len(),
    })
}
