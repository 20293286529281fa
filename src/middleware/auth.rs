use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{DateTime, SubsecRound, Utc};

use coursebyte_auth::{TokenMetadata, extract_token_metadata};
use coursebyte_core::AppError;

use crate::state::AppState;

/// Extractor that admits a caller holding a valid, non-expired bearer token.
///
/// The clock is read once here. Handlers stamp `created`/`updated` with
/// [`AuthUser::now`] so one request never sees two different instants.
/// The reading is truncated to microseconds, the precision of `TIMESTAMPTZ`.
///
/// Declared ahead of the body extractor in every handler, so a rejected
/// credential never reads the body.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub metadata: TokenMetadata,
    pub now: DateTime<Utc>,
}

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.metadata.user_id
    }

    /// Runs both credential checks against an explicit instant.
    pub fn authorize(
        authorization: Option<&str>,
        state: &AppState,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let metadata = extract_token_metadata(authorization, &state.jwt_config)?;
        metadata.ensure_not_expired(now.timestamp())?;

        Ok(AuthUser { metadata, now })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let now = Utc::now().trunc_subsecs(6);

        // A header that is not visible ASCII is treated like a wrong scheme.
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default());

        let auth_user = Self::authorize(authorization, state, now);
        if let Err(err) = &auth_user {
            tracing::warn!(status = %err.status.as_u16(), error = %err.message(), "credential rejected");
        }
        auth_user
    }
}
