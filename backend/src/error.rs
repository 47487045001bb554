use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoError {
    /// Missing or empty required field, or a storage constraint violation.
    #[error("{0}")]
    Validation(String),

    /// Path identifier and body identifier disagree.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    InvalidArgument,
    NotFound,
    Storage,
}

impl MemoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoError::Validation(_) => ErrorKind::Validation,
            MemoError::Conflict(_) => ErrorKind::Conflict,
            MemoError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MemoError::NotFound(_) => ErrorKind::NotFound,
            MemoError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<sqlx::Error> for MemoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => MemoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation => {
                    MemoError::Validation(db.message().to_string())
                }
                _ => MemoError::Storage(err.to_string()),
            },
            _ => MemoError::Storage(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_found() {
        let err = MemoError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn pool_failures_are_storage() {
        let err = MemoError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().starts_with("storage error"));
    }

    #[test]
    fn domain_messages_display_verbatim() {
        let err = MemoError::Validation("Memo Title cannot be null or empty.".to_string());
        assert_eq!(err.to_string(), "Memo Title cannot be null or empty.");
    }
}
