//! Clippings upload and result handlers

use super::StatusResponse;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::Multipart;
use chrono::{DateTime, Utc};
use clipmark_core::{convert_bytes, ClipmarkError, Conversion, Library, Status};
use serde::Serialize;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub file_name: String,
    pub status: Status,
    pub books: usize,
    pub highlights: usize,
}

/// Details of the run currently on display
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub id: String,
    pub file_name: String,
    pub books: usize,
    pub highlights: usize,
    pub completed_at: DateTime<Utc>,
}

type UploadError = (StatusCode, Json<StatusResponse>);

fn reject(code: StatusCode, status: Status) -> UploadError {
    (code, Json(StatusResponse { status }))
}

/// A newer upload owns the status line; report what it shows
async fn reject_stale(state: &AppState) -> UploadError {
    let current = state.session.read().await.status.clone();
    reject(StatusCode::CONFLICT, current)
}

/// Show a failed run's status, unless a newer run has taken over
async fn fail_run(
    state: &AppState,
    ticket: u64,
    code: StatusCode,
    status: Status,
) -> UploadError {
    if state.update_status(ticket, status.clone()).await {
        reject(code, status)
    } else {
        reject_stale(state).await
    }
}

/// Commit or report the outcome of one run
async fn finish_run(
    state: &AppState,
    ticket: u64,
    file_name: String,
    result: clipmark_core::Result<Conversion>,
) -> Result<Json<UploadResponse>, UploadError> {
    match result {
        Ok(conversion) => {
            let books = conversion.library.len();
            let highlights = conversion.library.highlight_count();
            let status = conversion.status();

            match state.commit(ticket, file_name.clone(), conversion).await {
                Some(id) => {
                    tracing::info!(file = %file_name, books, highlights, "clippings converted");
                    Ok(Json(UploadResponse {
                        id: id.to_string(),
                        file_name,
                        status,
                        books,
                        highlights,
                    }))
                }
                None => Err(reject_stale(state).await),
            }
        }
        Err(e) => {
            let code = match e {
                ClipmarkError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_REQUEST,
            };
            Err(fail_run(state, ticket, code, e.status()).await)
        }
    }
}

/// Upload a clippings export and run the pipeline on it
///
/// Only the multipart field named `file` is used. A request without it
/// behaves like an empty file picker.
pub async fn upload_clippings(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "malformed multipart body");
        reject(StatusCode::BAD_REQUEST, Status::ReadFailed)
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let ticket = state.begin_run();
        state
            .update_status(
                ticket,
                Status::Reading {
                    name: file_name.clone(),
                },
            )
            .await;

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "failed to read upload");
                let error =
                    fail_run(&state, ticket, StatusCode::BAD_REQUEST, Status::ReadFailed).await;
                return Err(error);
            }
        };

        // Parse in a blocking task (CPU-bound on large exports)
        let result = tokio::task::spawn_blocking(move || convert_bytes(&data))
            .await
            .map_err(|e| {
                tracing::error!("Task failed: {}", e);
                reject(StatusCode::INTERNAL_SERVER_ERROR, Status::ReadFailed)
            })?;

        return finish_run(&state, ticket, file_name, result).await;
    }

    state.set_status(Status::NoFileSelected).await;
    Err(reject(StatusCode::BAD_REQUEST, Status::NoFileSelected))
}

/// Current status line
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let session = state.session.read().await;
    Json(StatusResponse {
        status: session.status.clone(),
    })
}

/// Summary of the run on display
pub async fn get_run(State(state): State<AppState>) -> Result<Json<RunResponse>, StatusCode> {
    let session = state.session.read().await;
    let run = session.run.as_ref().ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(RunResponse {
        id: run.id.to_string(),
        file_name: run.file_name.clone(),
        books: run.conversion.library.len(),
        highlights: run.conversion.library.highlight_count(),
        completed_at: run.completed_at,
    }))
}

/// Markdown document of the run on display
pub async fn get_markdown(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let session = state.session.read().await;
    let run = session.run.as_ref().ok_or(StatusCode::NOT_FOUND)?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        run.conversion.markdown.clone(),
    )
        .into_response())
}

/// Grouped highlights of the run on display
pub async fn get_library(State(state): State<AppState>) -> Result<Json<Library>, StatusCode> {
    let session = state.session.read().await;
    let run = session.run.as_ref().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(run.conversion.library.clone()))
}
