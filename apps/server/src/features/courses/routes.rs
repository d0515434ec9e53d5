use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use course_types::{Course, CoursePathParams, CreateCourseReq, UpdateCourseReq};
use tracing::error;

use super::repo::RegistryError;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses in insertion order", body = Vec<Course>),
    ),
    tag = "Courses"
)]
pub async fn list(
    Extension(st): Extension<AppState>,
) -> Result<Json<Vec<Course>>, (StatusCode, String)> {
    let items = st.courses.list().map_err(map_registry_error)?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(CoursePathParams),
    responses(
        (status = 200, description = "Course with the given id", body = Course),
        (status = 404, description = "No course with the given id"),
    ),
    tag = "Courses"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    Path(CoursePathParams { id }): Path<CoursePathParams>,
) -> Result<Json<Course>, (StatusCode, String)> {
    let course = st.courses.get(id).map_err(map_registry_error)?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseReq,
    responses(
        (status = 200, description = "Created course with its assigned id", body = Course),
        (status = 400, description = "Name missing or shorter than 3 characters"),
    ),
    tag = "Courses"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    Json(req): Json<CreateCourseReq>,
) -> Result<Json<Course>, (StatusCode, String)> {
    let course = st
        .courses
        .create(req.name.as_deref())
        .map_err(map_registry_error)?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(CoursePathParams),
    request_body = UpdateCourseReq,
    responses(
        (status = 200, description = "Updated course", body = Course),
        (status = 400, description = "Name missing or shorter than 3 characters"),
        (status = 404, description = "No course with the given id"),
    ),
    tag = "Courses"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Path(CoursePathParams { id }): Path<CoursePathParams>,
    Json(req): Json<UpdateCourseReq>,
) -> Result<Json<Course>, (StatusCode, String)> {
    let course = st
        .courses
        .update(id, req.name.as_deref())
        .map_err(map_registry_error)?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(CoursePathParams),
    responses(
        (status = 200, description = "Removed course", body = Course),
        (status = 404, description = "No course with the given id"),
    ),
    tag = "Courses"
)]
pub async fn delete(
    Extension(st): Extension<AppState>,
    Path(CoursePathParams { id }): Path<CoursePathParams>,
) -> Result<Json<Course>, (StatusCode, String)> {
    let course = st.courses.delete(id).map_err(map_registry_error)?;
    Ok(Json(course))
}

fn map_registry_error(err: RegistryError) -> (StatusCode, String) {
    match err {
        RegistryError::NotFound => (StatusCode::NOT_FOUND, "not found".into()),
        RegistryError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        RegistryError::Poisoned(msg) => {
            error!(%msg, "course registry failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
        }
    }
}
