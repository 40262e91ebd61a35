//! Course endpoints

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Course, CourseDraft, ValidationError};

/// Create / replace course request. Missing or null fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CourseRequest {
    pub code: Option<String>,
    pub title: Option<String>,
}

impl CourseRequest {
    fn draft(&self) -> Result<CourseDraft, ValidationError> {
        CourseDraft::new(
            self.code.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default(),
        )
    }
}

/// Course listing with its size
#[derive(Debug, Serialize)]
pub struct CourseList {
    pub count: usize,
    pub items: Vec<Course>,
}

impl From<Vec<Course>> for CourseList {
    fn from(items: Vec<Course>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Updated course, id echoed from the path
#[derive(Debug, Serialize)]
pub struct UpdatedCourse {
    pub id: String,
    pub code: String,
    pub title: String,
}

/// GET /api/courses - all courses ordered by code
async fn list_courses(State(state): State<AppState>) -> Result<Json<CourseList>, ApiError> {
    let courses = state.store.list_courses().await?;
    Ok(Json(CourseList::from(courses)))
}

/// POST /api/courses - create a course (200, not 201)
async fn create_course(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Option<CourseRequest>>,
) -> Result<Json<Course>, ApiError> {
    let draft = req.unwrap_or_default().draft()?;
    let course = state.store.create_course(draft).await?;

    tracing::debug!(course_id = course.id, code = %course.code, "course created");
    Ok(Json(course))
}

/// PUT /api/courses/{id} - replace code and title
async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<Option<CourseRequest>>,
) -> Result<Json<UpdatedCourse>, ApiError> {
    let draft = req.unwrap_or_default().draft()?;
    state.store.update_course(&id, &draft).await?;

    Ok(Json(UpdatedCourse {
        id,
        code: draft.code().to_owned(),
        title: draft.title().to_owned(),
    }))
}

/// Course routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", put(update_course))
}
