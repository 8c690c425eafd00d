//! boxforge server - HTTP endpoint for box mesh export
//!
//! Clients POST three dimensions (and optionally a color and profile) and get
//! back one of:
//!
//! - `POST /create_obj` - a status message naming the written OBJ file
//! - `POST /download_obj` - the OBJ file itself
//! - `POST /download_zip` - a zip holding the OBJ and MTL files
//!
//! All failures come back as `400 {"error": "..."}`.

pub mod config;
pub mod error;
pub mod request;
pub mod state;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use boxforge_core::export::ExportName;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::request::BoxRequest;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/create_obj", post(create_obj))
        .route("/download_obj", post(download_obj))
        .route("/download_zip", post(download_zip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    "Hello, World!"
}

/// Write `object_<x>_<y>_<z>.obj` (+ `.mtl`) and report its name
async fn create_obj(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let job = BoxRequest::from_slice(&body)?.resolve(state.config())?;
    let result = state.export(job, ExportName::legacy(&job.dimensions)).await?;

    Ok(Json(json!({
        "message": format!("OBJ file created successfully as {}", result.obj_file_name())
    })))
}

/// Write a per-request pair and return the geometry file
async fn download_obj(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let job = BoxRequest::from_slice(&body)?.resolve(state.config())?;
    let result = state.export(job, ExportName::unique(&job.dimensions)).await?;
    let bytes = tokio::fs::read(&result.obj_path).await?;

    Ok(attachment("text/plain; charset=utf-8", &result.obj_file_name(), bytes))
}

/// Write a per-request pair, zip it and return the archive
async fn download_zip(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let job = BoxRequest::from_slice(&body)?.resolve(state.config())?;
    let name = ExportName::unique(&job.dimensions);
    let (_, zip_path) = state.export_archive(job, name.clone()).await?;
    let bytes = tokio::fs::read(&zip_path).await?;

    Ok(attachment("application/zip", &name.zip_file(), bytes))
}

fn attachment(content_type: &str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}
