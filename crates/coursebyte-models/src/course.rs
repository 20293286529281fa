//! Course domain model.
//!
//! One struct serves as request payload, persisted entity and response body.
//! Every field has a serde default so that a delete payload carrying only
//! `id` still parses; validation then decides which fields matter.

use chrono::{DateTime, Utc};
use coursebyte_core::DeclaredFields;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::attrs::CourseAttrs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    #[validate(custom(function = "validate_id", message = "id must be a valid, non-nil UUID"))]
    pub id: Uuid,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    #[validate(length(min = 1, message = "courseId is required"))]
    pub course_id: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "title is required and must be at most 255 characters"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "instructor must be at most 255 characters"))]
    pub instructor: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "image must be at most 255 characters"))]
    pub image: String,

    #[serde(default)]
    pub published: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub attributes: CourseAttrs,
}

impl DeclaredFields for Course {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("course_id", "courseId"),
        ("title", "title"),
        ("instructor", "instructor"),
        ("description", "description"),
        ("image", "image"),
    ];
}

fn validate_id(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("uuid"));
    }
    Ok(())
}
