//! Property review repository for centralized database operations

use sqlx::PgPool;

use super::utils::REVIEW_COLUMNS;
use crate::error::DbResult;
use crate::models::{NewReview, Review, ReviewWithContext};

/// Repository for property review database operations
#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new ReviewRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new review for a completed stay
    pub async fn create(&self, new_review: &NewReview) -> DbResult<Review> {
        let sql = format!(
            "INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            REVIEW_COLUMNS
        );
        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(new_review.guest_id)
            .bind(new_review.property_id)
            .bind(new_review.reservation_id)
            .bind(new_review.rating)
            .bind(&new_review.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(review)
    }

    /// List all reviews for a property with reviewer and stay context,
    /// oldest stay first
    pub async fn find_by_property(&self, property_id: i32) -> DbResult<Vec<ReviewWithContext>> {
        let reviews = sqlx::query_as::<_, ReviewWithContext>(
            r#"
            SELECT
                property_reviews.id,
                property_reviews.rating AS review_rating,
                property_reviews.message AS review_text,
                users.name AS reviewer_name,
                properties.title AS property_title,
                reservations.start_date,
                reservations.end_date
            FROM property_reviews
            JOIN reservations ON reservations.id = property_reviews.reservation_id
            JOIN properties ON properties.id = property_reviews.property_id
            JOIN users ON users.id = property_reviews.guest_id
            WHERE properties.id = $1
            ORDER BY reservations.start_date ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }
}
