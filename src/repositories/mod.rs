//! Database repository layer for LightBnB
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. This pattern:
//! - Reduces code duplication across the HTTP handlers above
//! - Provides a single source of truth for database queries
//! - Makes testing easier through dependency injection
//! - Keeps SQL queries consistent across the codebase
//!
//! Each repository holds its own handle to the shared [`sqlx::PgPool`];
//! there is no module-level singleton.

pub mod property;
pub mod reservation;
pub mod review;
pub mod search;
pub mod user;
pub mod utils;

pub use property::PropertyRepository;
pub use reservation::ReservationRepository;
pub use review::ReviewRepository;
pub use search::PropertySearchFilters;
pub use user::UserRepository;
