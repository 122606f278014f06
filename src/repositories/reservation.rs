//! Reservation repository for centralized database operations

use chrono::NaiveDate;
use sqlx::PgPool;

use super::utils::RESERVATION_COLUMNS;
use crate::error::{DbError, DbResult};
use crate::models::{NewReservation, Reservation, ReservationDates, ReservationSummary};

/// Columns shared by the fulfilled/upcoming listings: the reservation, its
/// property, and the property's review aggregate.
const SUMMARY_COLUMNS: &str = "reservations.id AS reservation_id, \
     reservations.start_date, reservations.end_date, \
     properties.id, properties.owner_id, properties.title, \
     properties.cost_per_night, properties.thumbnail_photo_url, \
     properties.number_of_bedrooms, properties.number_of_bathrooms, \
     properties.parking_spaces, \
     avg(property_reviews.rating)::float8 AS average_rating";

/// Repository for reservation database operations
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new ReservationRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new reservation
    pub async fn create(&self, new_reservation: &NewReservation) -> DbResult<Reservation> {
        let sql = format!(
            "INSERT INTO reservations (start_date, end_date, property_id, guest_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            RESERVATION_COLUMNS
        );
        let reservation = sqlx::query_as::<_, Reservation>(&sql)
            .bind(new_reservation.start_date)
            .bind(new_reservation.end_date)
            .bind(new_reservation.property_id)
            .bind(new_reservation.guest_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(reservation)
    }

    /// Update a reservation's dates
    ///
    /// Builds the SET clause from whichever dates are present. Supplying
    /// neither date is rejected up front rather than sent to the database.
    pub async fn update_dates(&self, dates: &ReservationDates) -> DbResult<Reservation> {
        let (sql, bound_dates) = render_dates_update(dates)?;

        let mut stmt = sqlx::query_as::<_, Reservation>(&sql);
        for date in bound_dates {
            stmt = stmt.bind(date);
        }
        let reservation = stmt
            .bind(dates.reservation_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                DbError::not_found("reservation", dates.reservation_id.to_string())
            })?;
        Ok(reservation)
    }

    /// Delete a reservation by id
    ///
    /// Deleting a nonexistent reservation is not an error; the statement
    /// simply affects zero rows.
    pub async fn delete(&self, reservation_id: i32) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(reservation_id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(
            reservation_id,
            rows = result.rows_affected(),
            "reservation deleted"
        );
        Ok(())
    }

    /// Find a reservation by its unique ID
    pub async fn find_by_id(&self, reservation_id: i32) -> DbResult<Option<Reservation>> {
        let sql = format!(
            "SELECT {} FROM reservations WHERE id = $1",
            RESERVATION_COLUMNS
        );
        let reservation = sqlx::query_as::<_, Reservation>(&sql)
            .bind(reservation_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(reservation)
    }

    /// List a guest's fulfilled reservations (end date already passed)
    pub async fn fulfilled_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> DbResult<Vec<ReservationSummary>> {
        self.summaries_for_guest(guest_id, limit, "reservations.end_date < now()::date")
            .await
    }

    /// List a guest's upcoming reservations (start date in the future)
    pub async fn upcoming_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> DbResult<Vec<ReservationSummary>> {
        self.summaries_for_guest(guest_id, limit, "reservations.start_date > now()::date")
            .await
    }

    /// Shared JOIN + aggregate listing behind the two date filters
    async fn summaries_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
        date_filter: &str,
    ) -> DbResult<Vec<ReservationSummary>> {
        let sql = format!(
            "SELECT {columns} \
             FROM reservations \
             JOIN properties ON reservations.property_id = properties.id \
             LEFT JOIN property_reviews ON properties.id = property_reviews.property_id \
             WHERE reservations.guest_id = $1 AND {date_filter} \
             GROUP BY properties.id, reservations.id \
             ORDER BY reservations.start_date \
             LIMIT $2",
            columns = SUMMARY_COLUMNS,
            date_filter = date_filter,
        );
        let summaries = sqlx::query_as::<_, ReservationSummary>(&sql)
            .bind(guest_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(summaries)
    }
}

/// Render the dynamic SET statement for a dates update
///
/// Returns the SQL and the dates to bind, in order; the reservation id is
/// always the final placeholder.
fn render_dates_update(dates: &ReservationDates) -> DbResult<(String, Vec<NaiveDate>)> {
    let (column, date) = match (dates.start_date, dates.end_date) {
        (Some(start), Some(end)) => {
            return Ok((
                format!(
                    "UPDATE reservations SET start_date = $1, end_date = $2 \
                     WHERE id = $3 RETURNING {}",
                    RESERVATION_COLUMNS
                ),
                vec![start, end],
            ));
        }
        (Some(start), None) => ("start_date", start),
        (None, Some(end)) => ("end_date", end),
        (None, None) => {
            return Err(DbError::Validation(
                "reservation update requires at least one of start_date, end_date".to_string(),
            ));
        }
    };

    Ok((
        format!(
            "UPDATE reservations SET {} = $1 WHERE id = $2 RETURNING {}",
            column, RESERVATION_COLUMNS
        ),
        vec![date],
    ))
}
