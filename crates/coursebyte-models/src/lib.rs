//! # Coursebyte Models
//!
//! The course entity and its attribute blob.
//!
//! - [`course`]: [`Course`] with its declared field constraints
//! - [`attrs`]: [`CourseAttrs`], the JSON-in-column attribute codec

pub mod attrs;
pub mod course;

pub use attrs::{CodecError, CourseAttrs};
pub use course::Course;
