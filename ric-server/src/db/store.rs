//! The store seam between HTTP handlers and persistence
//!
//! Handlers hold an `Arc<dyn Store>`. Every method maps to exactly one
//! statement against the backing store. Path identifiers are passed through
//! as the raw strings the client sent; the store decides whether they parse.

use async_trait::async_trait;

use crate::models::{Course, CourseDraft, Student, StudentName};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver or database failure, message passed through verbatim
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// An update or delete matched no rows
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Failure reported by a non-SQL backend
    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    /// All courses ordered by code.
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;

    /// All students ordered by name.
    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;

    /// Courses a student is enrolled in, ordered by code.
    ///
    /// An unknown student yields an empty list.
    async fn list_student_courses(&self, student_id: &str) -> Result<Vec<Course>, StoreError>;

    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError>;

    /// Replace code and title. `NotFound` when no row has `id`.
    async fn update_course(&self, id: &str, draft: &CourseDraft) -> Result<(), StoreError>;

    async fn create_student(&self, name: StudentName) -> Result<Student, StoreError>;

    /// `NotFound` when no row has `id`.
    async fn rename_student(&self, id: &str, name: &StudentName) -> Result<(), StoreError>;

    /// Insert the pair. Referential and uniqueness checks belong to the store.
    async fn enroll(&self, student_id: &str, course_id: i32) -> Result<(), StoreError>;

    /// Delete the pair. `NotFound` when nothing was removed.
    async fn unenroll(&self, student_id: &str, course_id: &str) -> Result<(), StoreError>;
}
