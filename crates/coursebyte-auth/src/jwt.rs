//! JWT verification and signing.
//!
//! Signature checking and expiry checking are deliberately separate:
//! [`verify_token`] turns off `jsonwebtoken`'s built-in `exp` validation (the
//! claim is still required to be present) and leaves the time comparison to
//! [`TokenMetadata::ensure_not_expired`](crate::TokenMetadata::ensure_not_expired).

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use coursebyte_config::JwtConfig;
use coursebyte_core::AppError;

use crate::claims::{Claims, TokenMetadata};
use crate::error::AuthError;

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::Missing)?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::Malformed),
    }
}

/// Checks the signature and decodes the claims without looking at `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

/// Locates, verifies and decodes the caller's credential.
pub fn extract_token_metadata(
    header: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<TokenMetadata, AuthError> {
    let token = bearer_token(header)?;
    let claims = verify_token(token, jwt_config)?;
    Ok(claims.into())
}

/// Signs a token for `user_id` that expires after the configured lifetime.
///
/// Tokens are normally issued elsewhere; this exists for tooling and tests.
pub fn create_access_token(user_id: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + jwt_config.access_token_expiry,
        iat: now,
    };

    sign_claims(&claims, jwt_config)
}

pub fn sign_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_bearer_token_missing() {
        assert!(matches!(bearer_token(None), Err(AuthError::Missing)));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert!(matches!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::Malformed)
        ));
        assert!(matches!(bearer_token(Some("Bearer ")), Err(AuthError::Malformed)));
    }

    #[test]
    fn test_bearer_token_success() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = get_test_jwt_config();
        let token = create_access_token("user-123", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let result = verify_token("invalid-token", &config);
        assert!(matches!(result, Err(AuthError::Invalid(_))));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token("user-123", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_expired_token_still_decodes() {
        let config = get_test_jwt_config();
        let claims = Claims {
            sub: "user-123".to_string(),
            exp: 1_000,
            iat: 900,
        };
        let token = sign_claims(&claims, &config).unwrap();
        let header = format!("Bearer {}", token);

        let metadata = extract_token_metadata(Some(&header), &config).unwrap();
        assert_eq!(metadata.expires, 1_000);

        let err = metadata.ensure_not_expired(Utc::now().timestamp()).unwrap_err();
        assert!(err.is_expired());
    }

    #[test]
    fn test_extract_token_metadata_missing_header() {
        let config = get_test_jwt_config();
        let err = extract_token_metadata(None, &config).unwrap_err();
        assert!(matches!(err, AuthError::Missing));
        assert!(!err.is_expired());
    }
}
