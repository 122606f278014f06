//! LightBnB database layer
//!
//! This crate is the data-access layer for the LightBnB short-term rental
//! booking application. It centralizes all SQL against the lightbnb schema
//! (users, properties, reservations, property_reviews) into repositories
//! that the HTTP layer calls with plain data.
//!
//! Every operation is a single parameterized statement against a shared
//! [`sqlx::PgPool`]; there are no transactions, no caching, and no retries.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use repositories::{
    PropertyRepository, PropertySearchFilters, ReservationRepository, ReviewRepository,
    UserRepository,
};

/// Default number of rows returned by listing queries when the caller
/// does not specify a limit.
pub const DEFAULT_RESULT_LIMIT: i64 = 10;
