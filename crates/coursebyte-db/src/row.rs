//! Column-level representation of a course.

use chrono::{DateTime, Utc};
use coursebyte_models::{CodecError, Course, CourseAttrs};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `courses` / `courses_v`, attributes still JSON-encoded.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub courseid: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub image: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub rawdata: String,
}

impl CourseRow {
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id,
            created: course.created,
            courseid: course.course_id.clone(),
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            description: course.description.clone(),
            image: course.image.clone(),
            published: course.published,
            updated: course.updated,
            rawdata: course.attributes.encode(),
        }
    }

    pub fn into_course(self) -> Result<Course, CodecError> {
        Ok(Course {
            id: self.id,
            created: self.created,
            course_id: self.courseid,
            title: self.title,
            instructor: self.instructor,
            description: self.description,
            image: self.image,
            published: self.published,
            updated: self.updated,
            attributes: CourseAttrs::decode(self.rawdata.as_bytes())?,
        })
    }
}
