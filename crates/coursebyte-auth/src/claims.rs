//! JWT claim structures.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identifier (subject claim)
    pub sub: String,
    /// Expiration, seconds since the Unix epoch
    pub exp: i64,
    /// Issued-at, seconds since the Unix epoch
    #[serde(default)]
    pub iat: i64,
}

/// The parts of a verified token the request pipeline acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub user_id: String,
    pub expires: i64,
}

impl TokenMetadata {
    /// Rejects the token when `now` is strictly past its expiry.
    pub fn ensure_not_expired(&self, now: i64) -> Result<(), AuthError> {
        if now > self.expires {
            return Err(AuthError::Expired {
                expires: self.expires,
                now,
            });
        }
        Ok(())
    }
}

impl From<Claims> for TokenMetadata {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            expires: claims.exp,
        }
    }
}
