//! Modules layer - Infrastructure components outside the request path
//!
//! Contains the one-shot database seeding routine.

pub mod seed;
