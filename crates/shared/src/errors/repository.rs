use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Folds postgres unique/foreign-key violations into the dedicated variants
    /// so services can answer with a conflict instead of a bare 500.
    pub fn from_sqlx(err: SqlxError, entity: &str) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db) => match db.code().as_deref() {
                Some("23505") => RepositoryError::AlreadyExists(format!("{entity} already exists")),
                Some("23503") => RepositoryError::ForeignKey(format!("{entity} references a missing record")),
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
