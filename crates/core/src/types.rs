/// Identifiers for projects and categories. Assigned in insertion order.
pub type DbId = i64;

/// Category filter value meaning "no filtering". Never a real category slug.
pub const ALL_CATEGORIES: &str = "all";
