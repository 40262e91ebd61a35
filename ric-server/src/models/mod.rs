//! Domain models with validation at construction
//!
//! Request input is trimmed and checked when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod course;
pub mod student;
pub mod enrollment;

pub use validation::ValidationError;
pub use course::{Course, CourseDraft};
pub use student::{Student, StudentName};
pub use enrollment::Enrollment;
