//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: bearer-token gate for mutating course operations
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies the signature and decodes the claims
//! 3. `AuthUser` compares the `exp` claim with the request's clock reading
//! 4. The body is parsed only after both checks pass
//!
//! ```ignore
//! async fn create_course(
//!     State(state): State<AppState>,
//!     auth_user: AuthUser,
//!     JsonPayload(course): JsonPayload<Course>,
//! ) -> Result<Json<CourseResponse>, AppError> {
//!     // auth_user.now stamps `created`
//! }
//! ```

pub mod auth;
