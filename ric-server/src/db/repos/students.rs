//! Student repository

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::{Student, StudentName};
use super::expect_rows;

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All students, ordered by name.
    pub async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name
            FROM students
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    pub async fn create(&self, name: StudentName) -> Result<Student, StoreError> {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO students (name) VALUES ($1) RETURNING id")
            .bind(name.as_str())
            .fetch_one(self.pool)
            .await?;

        Ok(Student {
            id,
            name: name.into_string(),
        })
    }

    pub async fn rename(&self, id: &str, name: &StudentName) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE students SET name = $1 WHERE id = $2::int")
            .bind(name.as_str())
            .bind(id)
            .execute(self.pool)
            .await?;

        expect_rows(result, "student")
    }
}
