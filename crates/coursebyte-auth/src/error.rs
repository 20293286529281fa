use coursebyte_core::AppError;
use thiserror::Error;

/// Message returned for a well-formed token whose expiry has passed.
pub const EXPIRED_MESSAGE: &str = "unauthorized, check expiration time of your token";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    Missing,

    #[error("malformed authorization header, expected 'Bearer <token>'")]
    Malformed,

    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token expired at {expires} (now {now})")]
    Expired { expires: i64, now: i64 },
}

impl AuthError {
    /// True for a token that decoded fine but is past its expiry.
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::Expired { .. })
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Missing => AppError::unauthorized(err.to_string()),
            AuthError::Expired { .. } => AppError::unauthorized(EXPIRED_MESSAGE),
            AuthError::Malformed | AuthError::Invalid(_) => AppError::internal(err),
        }
    }
}
