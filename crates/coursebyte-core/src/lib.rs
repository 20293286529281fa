//! # Coursebyte Core
//!
//! Core types shared by every Coursebyte crate:
//!
//! - [`errors`]: the request-scoped [`AppError`] and its JSON envelope
//! - [`validation`]: declarative field checks with full and partial modes
//!
//! # Example
//!
//! ```ignore
//! use coursebyte_core::{AppError, validation::{validate_struct, ensure_valid}};
//!
//! ensure_valid(validate_struct(&course))?;
//! let error = AppError::not_found(anyhow::anyhow!("course with this ID not found"));
//! ```

pub mod errors;
pub mod validation;

pub use errors::AppError;
pub use validation::{DeclaredFields, ensure_valid, validate_partial, validate_struct};
