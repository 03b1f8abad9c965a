use sqlx::{Postgres, QueryBuilder};

/// Appends `WHERE a = $1 AND b = $2 ...` for the filters that carry a value.
/// With no values nothing is appended, so the query is unconstrained.
pub fn push_equality_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    filters: &[(&str, Option<&str>)],
) {
    let mut separator = " WHERE ";
    for (column, value) in filters {
        if let Some(value) = value {
            builder
                .push(separator)
                .push(*column)
                .push(" = ")
                .push_bind(value.to_string());
            separator = " AND ";
        }
    }
}
