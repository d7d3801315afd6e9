//! Shared classification of pool and Diesel failures.
//!
//! Each repository turns a [`StoreFailure`] into its own port error, so the
//! Diesel error kinds are inspected in one place.

use tracing::debug;

use super::pool::PoolError;

/// What went wrong, stripped of Diesel types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    /// The connection could not be obtained or was lost.
    Connection(String),
    /// A unique constraint rejected the write.
    UniqueViolation,
    /// A foreign key constraint rejected the write.
    ForeignKeyViolation(String),
    /// Any other query failure.
    Query(String),
}

/// Pool failures always mean the store is unreachable.
pub(crate) fn classify_pool_error(error: PoolError) -> StoreFailure {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreFailure::Connection(message)
        }
    }
}

/// Classify a Diesel error, logging the details at debug level.
pub(crate) fn classify_diesel_error(error: diesel::result::Error) -> StoreFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreFailure::ForeignKeyViolation(
                info.constraint_name()
                    .unwrap_or("foreign key")
                    .to_owned(),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreFailure::Connection("database connection error".to_owned())
        }
        DieselError::NotFound => StoreFailure::Query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => StoreFailure::Query("database query error".to_owned()),
        _ => StoreFailure::Query("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct Info(Option<&'static str>);

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "constraint failed"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(constraint)))
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::UniqueViolation, Some("users_name_key")),
        StoreFailure::UniqueViolation
    )]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation, Some("country_visited_user_id_fkey")),
        StoreFailure::ForeignKeyViolation("country_visited_user_id_fkey".to_owned())
    )]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection, None),
        StoreFailure::Connection("database connection error".to_owned())
    )]
    #[case(DieselError::NotFound, StoreFailure::Query("record not found".to_owned()))]
    #[case(DieselError::RollbackTransaction, StoreFailure::Query("database error".to_owned()))]
    fn diesel_errors_are_classified(#[case] error: DieselError, #[case] expected: StoreFailure) {
        assert_eq!(classify_diesel_error(error), expected);
    }

    #[rstest]
    fn pool_errors_are_connection_failures() {
        assert_eq!(
            classify_pool_error(PoolError::checkout("timed out")),
            StoreFailure::Connection("timed out".to_owned())
        );
    }
}
