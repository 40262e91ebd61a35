//! Enrollment endpoints, nested under a student

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::courses::CourseList;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::Enrollment;

/// Enroll request. A missing or null course_id reads as 0.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnrollRequest {
    pub course_id: Option<i32>,
}

/// Removal receipt
#[derive(Debug, Serialize)]
pub struct RemovedEnrollment {
    pub student_id: String,
    pub course_id: String,
    pub status: &'static str,
}

/// GET /api/students/{id}/courses - unknown students get an empty list
async fn list_student_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<CourseList>, ApiError> {
    let courses = state.store.list_student_courses(&student_id).await?;
    Ok(Json(CourseList::from(courses)))
}

/// POST /api/students/{id}/courses
async fn enroll(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    JsonBody(req): JsonBody<Option<EnrollRequest>>,
) -> Result<Json<Enrollment>, ApiError> {
    let course_id = req.and_then(|r| r.course_id).unwrap_or_default();
    state.store.enroll(&student_id, course_id).await?;

    tracing::debug!(student_id = %student_id, course_id, "enrolled");
    Ok(Json(Enrollment {
        student_id,
        course_id,
    }))
}

/// DELETE /api/students/{id}/courses/{course_id}
async fn unenroll(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
) -> Result<Json<RemovedEnrollment>, ApiError> {
    state.store.unenroll(&student_id, &course_id).await?;

    Ok(Json(RemovedEnrollment {
        student_id,
        course_id,
        status: "removed",
    }))
}

/// Enrollment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/students/{id}/courses",
            get(list_student_courses).post(enroll),
        )
        .route("/students/{id}/courses/{course_id}", delete(unenroll))
}
