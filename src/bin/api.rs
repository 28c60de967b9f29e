use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use precis::{
    app_state::AppState,
    auth::handlers::{login, signup},
    config::Config,
    dispatch::{self, dtos, handlers::summarize},
    health,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check),
    components(schemas(
        health::HealthResponse,
        dispatch::ContentType,
        dtos::SummarizeRequest,
        dtos::SummarizeResponse,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration and build shared state
    let config = Config::from_env()?;
    let state = AppState::new(&config)?;

    let app = Router::new()
        .route("/healthz", get(health::health_check))
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/login", post(login))
        .route("/v1/summarize", post(summarize))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
