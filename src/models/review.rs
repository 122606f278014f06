//! Property review models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review from the property_reviews table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    /// Unique review identifier
    pub id: i32,

    /// Guest who wrote the review
    pub guest_id: i32,

    /// Reviewed property
    pub property_id: i32,

    /// Reservation the review belongs to
    pub reservation_id: i32,

    /// Integer rating, 1 through 5
    pub rating: i16,

    /// Free-text review body
    pub message: String,
}

/// Fields required to create a review
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub guest_id: i32,
    pub property_id: i32,
    pub reservation_id: i32,
    pub rating: i16,
    pub message: String,
}

/// Review joined with its reviewer, property, and reservation context,
/// as returned by the per-property listing
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithContext {
    pub id: i32,
    pub review_rating: i16,
    pub review_text: String,

    /// Reviewer's display name
    pub reviewer_name: String,

    pub property_title: String,

    // Stay the review belongs to
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
