use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation}: could not reach the database")]
    Connection {
        operation: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("{operation}: {message}")]
    NotFound { operation: &'static str, message: String },

    #[error("{operation}: constraint violated")]
    ConstraintViolation {
        operation: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("{operation}: {reason}")]
    Validation { operation: &'static str, reason: &'static str },

    #[error("{operation}: query failed")]
    Query {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl Error {
    /// Classifies a gateway failure and tags it with the operation that hit it.
    #[must_use]
    pub fn from_db(operation: &'static str, error: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_)) = error.sql_err() {
            return Self::ConstraintViolation {
                operation,
                source: error,
            };
        }
        match error {
            DbErr::RecordNotFound(message) => Self::NotFound { operation, message },
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connection {
                operation,
                source: error,
            },
            source => Self::Query { operation, source },
        }
    }

    pub(crate) fn not_found(operation: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            operation,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Connection { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::ConstraintViolation { operation, .. }
            | Self::Validation { operation, .. }
            | Self::Query { operation, .. } => operation,
        }
    }
}

/// Failures raised by the transaction machinery itself rather than by a statement.
impl From<DbErr> for Error {
    fn from(error: DbErr) -> Self {
        Self::from_db("transaction", error)
    }
}

pub(crate) trait DbResultExt<T> {
    fn context(self, operation: &'static str) -> Result<T, Error>;
}

impl<T> DbResultExt<T> for Result<T, DbErr> {
    fn context(self, operation: &'static str) -> Result<T, Error> {
        self.map_err(|error| Error::from_db(operation, error))
    }
}
