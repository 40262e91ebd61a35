//! In-process `Store` for tests and local runs without PostgreSQL
//!
//! Mirrors the reference schema: serial ids, foreign keys from enrollments
//! to students and courses, and a primary key on (student_id, course_id).
//! Ids that do not parse as integers are rejected the way PostgreSQL
//! rejects a failed `::int` cast.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Store, StoreError};
use crate::models::{Course, CourseDraft, Student, StudentName};

#[derive(Default)]
struct Tables {
    courses: Vec<Course>,
    students: Vec<Student>,
    enrollments: Vec<(i32, i32)>,
    last_course_id: i32,
    last_student_id: i32,
}

/// Mutex-guarded in-memory tables
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(raw: &str) -> Result<i32, StoreError> {
    raw.parse().map_err(|_| {
        StoreError::Backend(format!(
            "invalid input syntax for type integer: \"{}\"",
            raw
        ))
    })
}

fn sorted_courses(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
    courses
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(sorted_courses(tables.courses.clone()))
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let tables = self.tables.lock().await;
        let mut students = tables.students.clone();
        students.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(students)
    }

    async fn list_student_courses(&self, student_id: &str) -> Result<Vec<Course>, StoreError> {
        let student_id = parse_id(student_id)?;
        let tables = self.tables.lock().await;

        let courses = tables
            .enrollments
            .iter()
            .filter(|(s, _)| *s == student_id)
            .filter_map(|(_, c)| tables.courses.iter().find(|course| course.id == *c))
            .cloned()
            .collect();

        Ok(sorted_courses(courses))
    }

    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.last_course_id += 1;

        let course = draft.into_course(tables.last_course_id);
        tables.courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: &str, draft: &CourseDraft) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        let mut tables = self.tables.lock().await;

        let course = tables
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound { resource: "course" })?;
        course.code = draft.code().to_owned();
        course.title = draft.title().to_owned();
        Ok(())
    }

    async fn create_student(&self, name: StudentName) -> Result<Student, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.last_student_id += 1;

        let student = Student {
            id: tables.last_student_id,
            name: name.into_string(),
        };
        tables.students.push(student.clone());
        Ok(student)
    }

    async fn rename_student(&self, id: &str, name: &StudentName) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        let mut tables = self.tables.lock().await;

        let student = tables
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { resource: "student" })?;
        student.name = name.as_str().to_owned();
        Ok(())
    }

    async fn enroll(&self, student_id: &str, course_id: i32) -> Result<(), StoreError> {
        let student_id = parse_id(student_id)?;
        let mut tables = self.tables.lock().await;

        if !tables.students.iter().any(|s| s.id == student_id) {
            return Err(StoreError::Backend(format!(
                "enrollment references missing student {}",
                student_id
            )));
        }
        if !tables.courses.iter().any(|c| c.id == course_id) {
            return Err(StoreError::Backend(format!(
                "enrollment references missing course {}",
                course_id
            )));
        }
        if tables.enrollments.contains(&(student_id, course_id)) {
            return Err(StoreError::Backend(format!(
                "duplicate enrollment ({}, {})",
                student_id, course_id
            )));
        }

        tables.enrollments.push((student_id, course_id));
        Ok(())
    }

    async fn unenroll(&self, student_id: &str, course_id: &str) -> Result<(), StoreError> {
        let pair = (parse_id(student_id)?, parse_id(course_id)?);
        let mut tables = self.tables.lock().await;

        let before = tables.enrollments.len();
        tables.enrollments.retain(|e| *e != pair);

        if tables.enrollments.len() == before {
            Err(StoreError::NotFound {
                resource: "enrollment",
            })
        } else {
            Ok(())
        }
    }
}
