//! Request handlers

mod clippings;
mod sync;
mod view;

pub use clippings::*;
pub use sync::*;
pub use view::*;

use axum::Json;
use clipmark_core::Status;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The status line, as shown to the user
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,
}
