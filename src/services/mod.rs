// Service exports
pub mod cache;
pub mod postgres;

pub use cache::{CacheError, CacheKey, CacheStats, ScoreCache};
pub use postgres::{PostgresClient, PostgresError};
