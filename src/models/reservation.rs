//! Reservation models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reservation from the reservations table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    /// Unique reservation identifier
    pub id: i32,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Booked property
    pub property_id: i32,

    /// Booking guest
    pub guest_id: i32,
}

/// Fields required to create a reservation
///
/// Date ranges are not validated for overlap; the schema owns that
/// decision (and today does not enforce it either).
#[derive(Debug, Clone, Deserialize)]
pub struct NewReservation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// Date changes for an existing reservation
///
/// Either field may be omitted; omitting both is a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationDates {
    pub reservation_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A guest's reservation joined with its property and review aggregate,
/// as returned by the fulfilled/upcoming listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationSummary {
    /// Reservation identifier (aliased in SQL to avoid the property id)
    pub reservation_id: i32,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    // Property columns
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,

    /// Mean review rating for the property, NULL when unreviewed
    pub average_rating: Option<f64>,
}
