//! Property models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property listing from the properties table
///
/// `cost_per_night` is integer cents, matching the schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    /// Unique property identifier
    pub id: i32,

    /// Owning user
    pub owner_id: i32,

    pub title: String,
    pub description: String,

    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,

    /// Nightly cost in cents
    pub cost_per_night: i32,

    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,

    // Address fields
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
}

/// Fields required to create a property
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
}

/// Property annotated with its review aggregate, as returned by search
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyWithRating {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,

    /// Mean review rating, NULL when the property has no reviews
    pub average_rating: Option<f64>,

    /// Number of reviews for the property
    pub review_count: i64,
}
