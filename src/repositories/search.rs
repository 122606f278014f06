//! Property search query builder
//!
//! Turns a sparse [`PropertySearchFilters`] into one parameterized SQL
//! statement over `properties LEFT JOIN property_reviews`. Clauses are
//! accumulated as (template, values) pairs and placeholder indices are
//! assigned in a single render step from the bind list's length, so a
//! clause can never drift out of sync with its parameters.

use super::utils::{escape_like, PROPERTY_COLUMNS_QUALIFIED};

/// Optional constraints for the property search
///
/// `Some(0)` for a price bound is a real constraint here. The original
/// implementation skipped falsy values, so a minimum price of zero was
/// silently ignored; presence is now explicit.
#[derive(Debug, Clone, Default)]
pub struct PropertySearchFilters {
    /// Substring match against the property's city
    pub city: Option<String>,

    /// Exact match against the owning user
    pub owner_id: Option<i32>,

    /// Lower price bound in cents; only applied together with the upper bound
    pub minimum_price_per_night: Option<i32>,

    /// Upper price bound in cents; only applied together with the lower bound
    pub maximum_price_per_night: Option<i32>,

    /// Minimum average review rating; unreviewed properties never qualify
    pub minimum_rating: Option<i16>,
}

/// A value bound to a positional placeholder, kept in append order
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BindValue {
    Text(String),
    Int(i64),
}

/// A rendered statement plus its ordered bind list
#[derive(Debug, Clone)]
pub(crate) struct SearchQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// One conditional fragment awaiting placeholder assignment
///
/// `template` contains one `{}` marker per entry in `values`.
struct Clause {
    template: &'static str,
    values: Vec<BindValue>,
}

/// Replace each `{}` in the template with the next positional placeholder,
/// pushing the matching value onto the shared bind list
fn render_clause(clause: Clause, binds: &mut Vec<BindValue>) -> String {
    let mut parts = clause.template.split("{}");
    let mut out = String::from(parts.next().unwrap_or(""));
    for (rest, value) in parts.zip(clause.values) {
        binds.push(value);
        out.push_str(&format!("${}", binds.len()));
        out.push_str(rest);
    }
    out
}

/// Build the search statement for the given filters and result limit
pub(crate) fn build_search_query(filters: &PropertySearchFilters, limit: i64) -> SearchQuery {
    let mut clauses: Vec<Clause> = Vec::new();

    if let Some(city) = &filters.city {
        clauses.push(Clause {
            template: "city LIKE {}",
            values: vec![BindValue::Text(format!("%{}%", escape_like(city)))],
        });
    }

    if let Some(owner_id) = filters.owner_id {
        clauses.push(Clause {
            template: "owner_id = {}",
            values: vec![BindValue::Int(owner_id as i64)],
        });
    }

    // Both bounds are required; a lone bound applies no price filter.
    if let (Some(min), Some(max)) = (
        filters.minimum_price_per_night,
        filters.maximum_price_per_night,
    ) {
        clauses.push(Clause {
            template: "cost_per_night BETWEEN {} AND {}",
            values: vec![BindValue::Int(min as i64), BindValue::Int(max as i64)],
        });
    }

    let mut binds = Vec::new();
    let mut sql = format!(
        "SELECT {columns}, \
         avg(property_reviews.rating)::float8 AS average_rating, \
         count(property_reviews.rating) AS review_count \
         FROM properties \
         LEFT JOIN property_reviews ON properties.id = property_reviews.property_id \
         WHERE true",
        columns = PROPERTY_COLUMNS_QUALIFIED.split_whitespace().collect::<Vec<_>>().join(" "),
    );

    for clause in clauses {
        sql.push_str(" AND ");
        sql.push_str(&render_clause(clause, &mut binds));
    }

    // Required by the aggregate columns; id is the table's primary key.
    sql.push_str(" GROUP BY properties.id");

    // Aggregate filters must come after GROUP BY as HAVING, not WHERE.
    if let Some(rating) = filters.minimum_rating {
        let having = render_clause(
            Clause {
                template: "avg(property_reviews.rating) >= {}",
                values: vec![BindValue::Int(rating as i64)],
            },
            &mut binds,
        );
        sql.push_str(" HAVING ");
        sql.push_str(&having);
    }

    binds.push(BindValue::Int(limit));
    sql.push_str(&format!(" ORDER BY cost_per_night LIMIT ${}", binds.len()));

    tracing::debug!(sql = %sql, binds = binds.len(), "rendered property search");

    SearchQuery { sql, binds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn no_filters() -> PropertySearchFilters {
        PropertySearchFilters::default()
    }

    #[test]
    fn test_no_filters_renders_limit_only() {
        let query = build_search_query(&no_filters(), 10);
        assert!(query.sql.contains("WHERE true GROUP BY properties.id"));
        assert!(query.sql.ends_with("ORDER BY cost_per_night LIMIT $1"));
        assert_eq!(query.binds, vec![BindValue::Int(10)]);
    }

    #[test]
    fn test_base_query_shape() {
        let query = build_search_query(&no_filters(), 10);
        assert!(query
            .sql
            .starts_with("SELECT properties.id, properties.owner_id,"));
        assert!(query
            .sql
            .contains("avg(property_reviews.rating)::float8 AS average_rating"));
        assert!(query
            .sql
            .contains("count(property_reviews.rating) AS review_count"));
        assert!(query
            .sql
            .contains("LEFT JOIN property_reviews ON properties.id = property_reviews.property_id"));
    }

    #[test]
    fn test_city_filter() {
        let filters = PropertySearchFilters {
            city: Some("Vancouver".to_string()),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(query.sql.contains("AND city LIKE $1"));
        assert!(query.sql.ends_with("LIMIT $2"));
        assert_eq!(
            query.binds,
            vec![
                BindValue::Text("%Vancouver%".to_string()),
                BindValue::Int(10),
            ]
        );
    }

    #[test]
    fn test_city_filter_escapes_wildcards() {
        let filters = PropertySearchFilters {
            city: Some("100%_town".to_string()),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert_eq!(
            query.binds[0],
            BindValue::Text(r"%100\%\_town%".to_string())
        );
    }

    #[test]
    fn test_owner_filter() {
        let filters = PropertySearchFilters {
            owner_id: Some(42),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(query.sql.contains("AND owner_id = $1"));
        assert_eq!(query.binds, vec![BindValue::Int(42), BindValue::Int(10)]);
    }

    #[test]
    fn test_price_range_requires_both_bounds() {
        let filters = PropertySearchFilters {
            minimum_price_per_night: Some(5000),
            maximum_price_per_night: Some(20000),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(query.sql.contains("AND cost_per_night BETWEEN $1 AND $2"));
        assert_eq!(
            query.binds,
            vec![
                BindValue::Int(5000),
                BindValue::Int(20000),
                BindValue::Int(10),
            ]
        );
    }

    #[rstest]
    #[case(Some(5000), None)]
    #[case(None, Some(20000))]
    fn test_single_price_bound_filters_nothing(
        #[case] min: Option<i32>,
        #[case] max: Option<i32>,
    ) {
        let filters = PropertySearchFilters {
            minimum_price_per_night: min,
            maximum_price_per_night: max,
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(!query.sql.contains("cost_per_night BETWEEN"));
        assert_eq!(query.binds, vec![BindValue::Int(10)]);
    }

    #[test]
    fn test_zero_minimum_price_is_present() {
        // A zero bound is a real constraint, not an absent field.
        let filters = PropertySearchFilters {
            minimum_price_per_night: Some(0),
            maximum_price_per_night: Some(10000),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(query.sql.contains("AND cost_per_night BETWEEN $1 AND $2"));
        assert_eq!(query.binds[0], BindValue::Int(0));
    }

    #[test]
    fn test_minimum_rating_renders_having_after_group_by() {
        let filters = PropertySearchFilters {
            minimum_rating: Some(4),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        assert!(query
            .sql
            .contains("GROUP BY properties.id HAVING avg(property_reviews.rating) >= $1"));
        assert!(query.sql.ends_with("LIMIT $2"));
        assert_eq!(query.binds, vec![BindValue::Int(4), BindValue::Int(10)]);
    }

    #[test]
    fn test_all_filters_bind_in_append_order() {
        let filters = PropertySearchFilters {
            city: Some("Toronto".to_string()),
            owner_id: Some(7),
            minimum_price_per_night: Some(1000),
            maximum_price_per_night: Some(9000),
            minimum_rating: Some(3),
        };
        let query = build_search_query(&filters, 25);
        assert!(query.sql.contains("AND city LIKE $1"));
        assert!(query.sql.contains("AND owner_id = $2"));
        assert!(query.sql.contains("AND cost_per_night BETWEEN $3 AND $4"));
        assert!(query
            .sql
            .contains("HAVING avg(property_reviews.rating) >= $5"));
        assert!(query.sql.ends_with("ORDER BY cost_per_night LIMIT $6"));
        assert_eq!(
            query.binds,
            vec![
                BindValue::Text("%Toronto%".to_string()),
                BindValue::Int(7),
                BindValue::Int(1000),
                BindValue::Int(9000),
                BindValue::Int(3),
                BindValue::Int(25),
            ]
        );
    }

    #[test]
    fn test_clause_order_where_group_having_limit() {
        let filters = PropertySearchFilters {
            city: Some("Calgary".to_string()),
            minimum_rating: Some(4),
            ..Default::default()
        };
        let query = build_search_query(&filters, 10);
        let where_pos = query.sql.find("WHERE true").unwrap();
        let city_pos = query.sql.find("city LIKE").unwrap();
        let group_pos = query.sql.find("GROUP BY").unwrap();
        let having_pos = query.sql.find("HAVING").unwrap();
        let order_pos = query.sql.find("ORDER BY").unwrap();
        assert!(where_pos < city_pos);
        assert!(city_pos < group_pos);
        assert!(group_pos < having_pos);
        assert!(having_pos < order_pos);
    }
}
