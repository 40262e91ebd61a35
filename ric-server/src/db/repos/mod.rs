//! Repository implementations for PostgreSQL access
//!
//! Each repository follows these patterns:
//! - One parameterized statement per method
//! - Path ids are bound as text and cast in SQL, so a non-numeric id is
//!   rejected by PostgreSQL rather than pre-validated here
//! - Zero affected rows on update/delete becomes `StoreError::NotFound`

pub mod courses;
pub mod students;
pub mod enrollments;

pub use courses::CourseRepo;
pub use students::StudentRepo;
pub use enrollments::EnrollmentRepo;

use sqlx::postgres::PgQueryResult;

use super::StoreError;

/// Map an empty UPDATE/DELETE to `NotFound`.
pub(crate) fn expect_rows(
    result: PgQueryResult,
    resource: &'static str,
) -> Result<(), StoreError> {
    if result.rows_affected() == 0 {
        Err(StoreError::NotFound { resource })
    } else {
        Ok(())
    }
}
