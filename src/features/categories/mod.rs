//! Hazard categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Paginated list |
//! | GET | `/api/categories/search?q=` | Substring search on name |
//! | GET | `/api/category/{id}` | Get one category |
//! | POST | `/api/categories` | Create a category |
//! | PUT | `/api/category/{id}` | Partial update |
//! | DELETE | `/api/category/{id}` | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
