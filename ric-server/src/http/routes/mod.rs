//! Route handlers organized by resource

pub mod health;
pub mod courses;
pub mod students;
pub mod enrollments;

use axum::Router;

use super::server::AppState;

/// Everything served under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(courses::router())
        .merge(students::router())
        .merge(enrollments::router())
}
