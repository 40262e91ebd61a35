//! Course repository
//!
//! - list / list_for_student: ordered by code, ties broken by id
//! - create: INSERT ... RETURNING id
//! - update: full replace of code + title

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::{Course, CourseDraft};
use super::expect_rows;

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All courses, ordered by code.
    pub async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, code, title
            FROM courses
            ORDER BY code ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }

    /// Courses joined through enrollments for one student.
    ///
    /// No existence check on the student: unknown ids give an empty list.
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<Course>, StoreError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.code, c.title
            FROM enrollments e
            JOIN courses c ON c.id = e.course_id
            WHERE e.student_id = $1::int
            ORDER BY c.code ASC, c.id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn create(&self, draft: CourseDraft) -> Result<Course, StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO courses (code, title)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(draft.code())
        .bind(draft.title())
        .fetch_one(self.pool)
        .await?;

        Ok(draft.into_course(id))
    }

    pub async fn update(&self, id: &str, draft: &CourseDraft) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET code = $1, title = $2
            WHERE id = $3::int
            "#,
        )
        .bind(draft.code())
        .bind(draft.title())
        .bind(id)
        .execute(self.pool)
        .await?;

        expect_rows(result, "course")
    }
}
