//! Database models for the lightbnb schema
//!
//! These structs mirror rows of the externally owned schema (users,
//! properties, reservations, property_reviews) plus the joined/aggregated
//! shapes returned by listing queries.

pub mod property;
pub mod reservation;
pub mod review;
pub mod user;

pub use property::{NewProperty, Property, PropertyWithRating};
pub use reservation::{NewReservation, Reservation, ReservationDates, ReservationSummary};
pub use review::{NewReview, Review, ReviewWithContext};
pub use user::{NewUser, User};
