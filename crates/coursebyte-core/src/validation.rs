//! Declarative field validation.
//!
//! Constraints are declared with `#[derive(Validate)]` from the `validator`
//! crate. The derive reports errors in a hash map, so a type also lists its
//! constrained fields through [`DeclaredFields`] to get a stable report order.
//!
//! Two modes are supported:
//!
//! - [`validate_struct`]: every constrained field is checked
//! - [`validate_partial`]: only the named fields are checked
//!
//! Both return a list of human-readable violations, empty when the value is
//! valid.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;

/// Constrained fields of a type in declaration order.
///
/// Each entry is `(rust_name, wire_name)`. Partial validation accepts either
/// form, and violation lookups try both since the derive may key errors by
/// either name.
pub trait DeclaredFields {
    const FIELDS: &'static [(&'static str, &'static str)];
}

pub fn validate_struct<T>(value: &T) -> Vec<String>
where
    T: Validate + DeclaredFields,
{
    collect(value, |_| true)
}

pub fn validate_partial<T>(value: &T, fields: &[&str]) -> Vec<String>
where
    T: Validate + DeclaredFields,
{
    collect(value, |(rust, wire)| {
        fields.iter().any(|f| f == rust || f == wire)
    })
}

/// Turns a non-empty violation list into a 400 error.
pub fn ensure_valid(violations: Vec<String>) -> Result<(), AppError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(&violations))
    }
}

fn collect<T, F>(value: &T, in_scope: F) -> Vec<String>
where
    T: Validate + DeclaredFields,
    F: Fn(&(&'static str, &'static str)) -> bool,
{
    let Err(errors) = value.validate() else {
        return Vec::new();
    };

    T::FIELDS
        .iter()
        .filter(|field| in_scope(field))
        .flat_map(|&(rust, wire)| field_messages(&errors, rust, wire))
        .collect()
}

fn field_messages(errors: &ValidationErrors, rust: &str, wire: &str) -> Vec<String> {
    let field_errors = errors.field_errors();
    let Some(found) = field_errors.get(rust).or_else(|| field_errors.get(wire)) else {
        return Vec::new();
    };

    found.iter().map(|error| describe(error, wire)).collect()
}

fn describe(error: &ValidationError, wire: &str) -> String {
    error
        .message
        .as_ref()
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| format!("{} is invalid", wire))
}
