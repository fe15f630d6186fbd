pub mod domain;
pub mod models;
pub mod processing;
pub mod repository;

/// Number of neighbours returned when a request does not ask for a count.
pub const DEFAULT_SIMILAR_COUNT: usize = 5;
