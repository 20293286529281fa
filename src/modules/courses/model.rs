use coursebyte_models::Course;
use serde::{Deserialize, Serialize};

/// Success envelope for a single course.
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseResponse {
    pub error: bool,
    pub msg: Option<String>,
    pub course: Option<Course>,
}

impl CourseResponse {
    pub fn ok(course: Course) -> Self {
        Self {
            error: false,
            msg: None,
            course: Some(course),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub error: bool,
    pub msg: Option<String>,
    pub count: usize,
    pub courses: Option<Vec<Course>>,
}

impl CoursesResponse {
    pub fn ok(courses: Vec<Course>) -> Self {
        Self {
            error: false,
            msg: None,
            count: courses.len(),
            courses: Some(courses),
        }
    }
}
