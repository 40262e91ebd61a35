//! Student/course enrollment pair

use serde::Serialize;

/// An enrollment as reported back to clients.
///
/// `student_id` is the path segment exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub student_id: String,
    pub course_id: i32,
}
