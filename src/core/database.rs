use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::borrow::Cow;
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Convert a database error into an AppError with a client-safe message.
///
/// Constraint violations become 409/400; anything else stays a generic
/// database error whose details only reach the logs.
pub fn map_db_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code() == Some(Cow::Borrowed(UNIQUE_VIOLATION)) {
            tracing::warn!("{}: unique violation: {}", context, db_err.message());
            return AppError::Conflict(format!("{}: record already exists", context));
        }

        if db_err.code() == Some(Cow::Borrowed(FOREIGN_KEY_VIOLATION)) {
            tracing::warn!("{}: foreign key violation: {}", context, db_err.message());
            return AppError::BadRequest(format!(
                "{}: referenced record does not exist or is still in use",
                context
            ));
        }
    }

    tracing::error!("{}: {:?}", context, e);
    AppError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_errors_stay_database_errors() {
        let err = map_db_error(sqlx::Error::RowNotFound, "Failed to load member");
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }
}
