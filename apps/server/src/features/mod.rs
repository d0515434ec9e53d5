use crate::AppState;
use axum::{routing::get, Extension, Router};

pub mod courses;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/courses", courses::router())
        .layer(Extension(state))
}

async fn root() -> &'static str {
    "Hi"
}
