//! Hazards, each linked to one category.
//!
//! The category link is advisory: it is not checked when a hazard is written
//! and deleting a category keeps its hazards. List and search responses
//! resolve the link into a `category` object (`null` when it dangles).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/hazards` | Paginated list, category resolved |
//! | GET | `/api/hazards/search?q=` | Substring search on name or description |
//! | GET | `/api/hazard/{id}` | Get one hazard |
//! | POST | `/api/hazards` | Create a hazard |
//! | PUT | `/api/hazard/{id}` | Partial update |
//! | DELETE | `/api/hazard/{id}` | Delete a hazard |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;


pub use repositories::{HazardRepository, PgHazardRepository};
pub use services::HazardService;
