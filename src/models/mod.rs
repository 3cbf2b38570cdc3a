pub mod course;

pub use course::{Course, CourseFilter, NewCourseRequest, UpdateCourseRequest};
