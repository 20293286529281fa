//! # Coursebyte Auth
//!
//! Credential handling for mutating course operations.
//!
//! Verification happens in two separate steps so that a bad token and a stale
//! token stay distinguishable:
//!
//! 1. [`extract_token_metadata`] finds the bearer token, checks its signature
//!    and decodes the claims. Expiry is *not* checked here.
//! 2. [`TokenMetadata::ensure_not_expired`] compares the `exp` claim against a
//!    wall-clock instant supplied by the caller.
//!
//! # Example
//!
//! ```ignore
//! use coursebyte_auth::extract_token_metadata;
//!
//! let now = chrono::Utc::now().timestamp();
//! let metadata = extract_token_metadata(authorization_header, &jwt_config)?;
//! metadata.ensure_not_expired(now)?;
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

pub use claims::{Claims, TokenMetadata};
pub use error::AuthError;
pub use jwt::{bearer_token, create_access_token, extract_token_metadata, sign_claims, verify_token};
