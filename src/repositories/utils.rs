//! Shared utility functions for repositories

/// Escape special characters in LIKE patterns to prevent pattern injection.
///
/// LIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match
/// literally.
pub fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT column lists for each entity type,
// reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for property queries
pub const PROPERTY_COLUMNS: &str = r#"
    id, owner_id, title, description,
    number_of_bedrooms, number_of_bathrooms, parking_spaces,
    cost_per_night, thumbnail_photo_url, cover_photo_url,
    street, city, province, post_code, country
"#;

/// Property columns qualified for joins against property_reviews
pub const PROPERTY_COLUMNS_QUALIFIED: &str = r#"
    properties.id, properties.owner_id, properties.title, properties.description,
    properties.number_of_bedrooms, properties.number_of_bathrooms, properties.parking_spaces,
    properties.cost_per_night, properties.thumbnail_photo_url, properties.cover_photo_url,
    properties.street, properties.city, properties.province, properties.post_code,
    properties.country
"#;

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, name, email, password";

/// SQL columns for reservation queries
pub const RESERVATION_COLUMNS: &str = "id, start_date, end_date, property_id, guest_id";

/// SQL columns for review queries
pub const REVIEW_COLUMNS: &str = "id, guest_id, property_id, reservation_id, rating, message";
