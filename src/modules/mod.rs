pub mod courses;

pub use self::courses::model::{CourseResponse, CoursesResponse};
