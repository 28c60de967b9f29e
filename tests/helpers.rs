use axum::{Router, routing::post};
use std::sync::Arc;
use tempfile::TempDir;

use precis::{
    app_state::AppState,
    auth::handlers::{login, signup},
    credentials::FileCredentialStore,
    dispatch::handlers::summarize,
    summarizer::HttpSummarizer,
};

/// Build the app router over a scratch credential file. The returned TempDir
/// must stay alive for the duration of the test; dropping it deletes the
/// credential store out from under the router.
pub fn test_app(summarizer_url: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let state = AppState {
        credentials: Arc::new(FileCredentialStore::new(dir.path().join("user_data.json"))),
        summarizer: Arc::new(
            HttpSummarizer::new(summarizer_url).expect("Failed to build summarizer"),
        ),
    };

    let router = Router::new()
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/login", post(login))
        .route("/v1/summarize", post(summarize))
        .with_state(state);

    (router, dir)
}
