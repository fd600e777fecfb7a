/// Default page size for list endpoints
pub const DEFAULT_LIMIT: i64 = 10;

/// Default number of skipped records for list endpoints
pub const DEFAULT_OFFSET: i64 = 0;

/// Colour assigned to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#FF0000";
