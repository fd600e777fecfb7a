mod hazard;

pub use hazard::{Hazard, HazardChanges, HazardWithCategory, NewHazard};
