pub mod categories;
pub mod hazards;
