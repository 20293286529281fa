use coursebyte_core::AppError;
use coursebyte_models::CodecError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("course {0} not found")]
    NotFound(Uuid),

    #[error("course {0} already exists")]
    Duplicate(Uuid),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),

    #[error("stored attributes could not be decoded: {0}")]
    Corrupt(#[from] CodecError),

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Classifies a failed insert of `id`.
    pub(crate) fn on_insert(err: sqlx::Error, id: Uuid) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return StoreError::Duplicate(id);
        }
        StoreError::Storage(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::not_found(err),
            _ => AppError::internal(err),
        }
    }
}
