mod docs;
mod features;

use tracing::info;
use utoipa::OpenApi;

use features::courses::repo::CourseRegistry;

#[derive(Clone)]
pub struct AppState {
    pub courses: CourseRegistry,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let state = AppState {
        courses: CourseRegistry::seeded(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let bind = format!("0.0.0.0:{port}");

    let app = features::router(state).merge(docs::router(docs::ApiDoc::openapi()));
    info!(%bind, "course registry listening");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
