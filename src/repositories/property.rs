//! Property repository for centralized database operations

use sqlx::PgPool;

use super::search::{build_search_query, BindValue, PropertySearchFilters};
use super::utils::PROPERTY_COLUMNS;
use crate::error::DbResult;
use crate::models::{NewProperty, Property, PropertyWithRating};

/// Repository for property database operations
#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new PropertyRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search properties matching the given filters
    ///
    /// Results are annotated with their review aggregate (NULL rating and
    /// zero count for unreviewed properties) and ordered by ascending
    /// nightly cost, at most `limit` rows.
    pub async fn search(
        &self,
        filters: &PropertySearchFilters,
        limit: i64,
    ) -> DbResult<Vec<PropertyWithRating>> {
        let query = build_search_query(filters, limit);

        let mut stmt = sqlx::query_as::<_, PropertyWithRating>(&query.sql);
        for value in query.binds {
            stmt = match value {
                BindValue::Text(text) => stmt.bind(text),
                BindValue::Int(int) => stmt.bind(int),
            };
        }

        let properties = stmt.fetch_all(&self.pool).await?;
        Ok(properties)
    }

    /// Create a new property listing
    ///
    /// Owner existence is not validated here; the owner_id foreign key
    /// constraint owns that.
    pub async fn create(&self, new_property: &NewProperty) -> DbResult<Property> {
        let sql = format!(
            r#"
            INSERT INTO properties (
                owner_id, title, description,
                number_of_bedrooms, number_of_bathrooms, parking_spaces,
                cost_per_night, thumbnail_photo_url, cover_photo_url,
                street, city, province, post_code, country
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            PROPERTY_COLUMNS
        );

        let property = sqlx::query_as::<_, Property>(&sql)
            .bind(new_property.owner_id)
            .bind(&new_property.title)
            .bind(&new_property.description)
            .bind(new_property.number_of_bedrooms)
            .bind(new_property.number_of_bathrooms)
            .bind(new_property.parking_spaces)
            .bind(new_property.cost_per_night)
            .bind(&new_property.thumbnail_photo_url)
            .bind(&new_property.cover_photo_url)
            .bind(&new_property.street)
            .bind(&new_property.city)
            .bind(&new_property.province)
            .bind(&new_property.post_code)
            .bind(&new_property.country)
            .fetch_one(&self.pool)
            .await?;
        Ok(property)
    }
}
