use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    app_state::AppState,
    auth::middleware::AuthenticatedUser,
    dispatch::{
        ProcessError,
        dtos::{SummarizeRequest, SummarizeResponse},
        ingest,
    },
};

/// The single content-processing action: dispatch the input to an ingestion
/// path, then summarize the extracted text. Every failure is rendered as a
/// user-visible message; nothing here is fatal to the process.
pub async fn summarize(
    auth_user: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Response {
    let doc = match ingest(payload.content_type, &payload.input).await {
        Ok(doc) => doc,
        Err(error) => return error.into_response(),
    };

    let summary = match state.summarizer.summarize(&doc.text).await {
        Ok(summary) => summary,
        Err(error) => return ProcessError::from(error).into_response(),
    };

    info!(
        user = %auth_user.username,
        content_type = ?payload.content_type,
        language = summary.detected_language.as_deref().unwrap_or("unknown"),
        "produced summary"
    );

    (
        StatusCode::OK,
        Json(SummarizeResponse::from_parts(doc, summary)),
    )
        .into_response()
}
