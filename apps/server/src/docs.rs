use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::courses::routes::list,
        crate::features::courses::routes::get,
        crate::features::courses::routes::create,
        crate::features::courses::routes::update,
        crate::features::courses::routes::delete,
    ),
    components(
        schemas(
            course_types::Course,
            course_types::CreateCourseReq,
            course_types::UpdateCourseReq,
        )
    ),
    tags(
        (name = "Courses", description = "Course registry CRUD operations."),
    )
)]
pub struct ApiDoc;

pub fn router(openapi: OpenApiDoc) -> Router {
    let spec = openapi.clone();
    Router::new()
        .route(
            "/docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
}
