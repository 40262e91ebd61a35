//! PostgreSQL-backed `Store`

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CourseRepo, EnrollmentRepo, StudentRepo};
use super::{Store, StoreError};
use crate::models::{Course, CourseDraft, Student, StudentName};

/// `Store` over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        CourseRepo::new(&self.pool).list().await
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        StudentRepo::new(&self.pool).list().await
    }

    async fn list_student_courses(&self, student_id: &str) -> Result<Vec<Course>, StoreError> {
        CourseRepo::new(&self.pool).list_for_student(student_id).await
    }

    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError> {
        CourseRepo::new(&self.pool).create(draft).await
    }

    async fn update_course(&self, id: &str, draft: &CourseDraft) -> Result<(), StoreError> {
        CourseRepo::new(&self.pool).update(id, draft).await
    }

    async fn create_student(&self, name: StudentName) -> Result<Student, StoreError> {
        StudentRepo::new(&self.pool).create(name).await
    }

    async fn rename_student(&self, id: &str, name: &StudentName) -> Result<(), StoreError> {
        StudentRepo::new(&self.pool).rename(id, name).await
    }

    async fn enroll(&self, student_id: &str, course_id: i32) -> Result<(), StoreError> {
        EnrollmentRepo::new(&self.pool).add(student_id, course_id).await
    }

    async fn unenroll(&self, student_id: &str, course_id: &str) -> Result<(), StoreError> {
        EnrollmentRepo::new(&self.pool).remove(student_id, course_id).await
    }
}
