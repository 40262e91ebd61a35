//! Student endpoints

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Student, StudentName};

/// Create / rename student request. A missing or null name reads as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentRequest {
    pub name: Option<String>,
}

impl StudentRequest {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Student listing (no count, unlike courses)
#[derive(Debug, Serialize)]
pub struct StudentList {
    pub items: Vec<Student>,
}

/// Renamed student, id echoed from the path
#[derive(Debug, Serialize)]
pub struct UpdatedStudent {
    pub id: String,
    pub name: String,
}

/// GET /api/students - all students ordered by name
async fn list_students(State(state): State<AppState>) -> Result<Json<StudentList>, ApiError> {
    let items = state.store.list_students().await?;
    Ok(Json(StudentList { items }))
}

/// POST /api/students
async fn create_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Option<StudentRequest>>,
) -> Result<Json<Student>, ApiError> {
    let name = StudentName::new(req.unwrap_or_default().name())?;
    let student = state.store.create_student(name).await?;

    tracing::debug!(student_id = student.id, "student created");
    Ok(Json(student))
}

/// PUT /api/students/{id}
async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<Option<StudentRequest>>,
) -> Result<Json<UpdatedStudent>, ApiError> {
    let name = StudentName::new(req.unwrap_or_default().name())?;
    state.store.rename_student(&id, &name).await?;

    Ok(Json(UpdatedStudent {
        id,
        name: name.into_string(),
    }))
}

/// Student routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/{id}", put(update_student))
}
