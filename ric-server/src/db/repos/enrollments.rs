//! Enrollment repository
//!
//! No check-then-insert: foreign keys and the (student_id, course_id)
//! primary key in the schema decide whether an insert is valid.

use sqlx::PgPool;

use crate::db::StoreError;
use super::expect_rows;

/// Enrollment repository
pub struct EnrollmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, student_id: &str, course_id: i32) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1::int, $2)")
            .bind(student_id)
            .bind(course_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Remove every row matching the pair.
    pub async fn remove(&self, student_id: &str, course_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "DELETE FROM enrollments WHERE student_id = $1::int AND course_id = $2::int",
        )
        .bind(student_id)
        .bind(course_id)
        .execute(self.pool)
        .await?;

        expect_rows(result, "enrollment")
    }
}
