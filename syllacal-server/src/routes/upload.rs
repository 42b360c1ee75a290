//! Syllabus upload endpoint

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Datelike, Local};
use serde::Serialize;

use syllacal_core::{CalendarEvent, extract_events};

use crate::routes::{AppError, ErrorResponse};

/// Maximum accepted upload size (10 MiB)
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router {
    Router::new()
        .route("/api/upload", post(upload))
        // Twice the accepted size: moderately oversized files still reach
        // the handler and get the friendly rejection message
        .layer(DefaultBodyLimit::max(2 * MAX_UPLOAD_BYTES))
}

/// JSON envelope returned for a processed upload
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub events: Vec<CalendarEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_found: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/upload - extract events from an uploaded syllabus PDF
async fn upload(mut multipart: Multipart) -> Result<Response, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return Ok(reject("Please select a PDF file."));
        }

        let bytes = field.bytes().await?;
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Ok(reject(
                "File size too large. Please select a PDF smaller than 10MB.",
            ));
        }

        file_bytes = Some(bytes.to_vec());
    }

    let bytes = match file_bytes {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Ok(reject("No file uploaded or file is empty")),
    };

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow::anyhow!("Failed to process PDF: {e}"))?;

    let events = extract_events(&text, Local::now().year());
    tracing::info!(
        "extracted {} events from {} byte upload",
        events.len(),
        bytes.len()
    );

    let response = if events.is_empty() {
        UploadResponse {
            success: true,
            events,
            total_found: None,
            warning: Some(
                "No dates found in syllabus. The document may not contain recognizable date formats."
                    .to_string(),
            ),
        }
    } else {
        let total_found = Some(events.len());
        UploadResponse {
            success: true,
            events,
            total_found,
            warning: None,
        }
    };

    Ok(Json(response).into_response())
}

/// Rejection before the pipeline is ever invoked: bad type, oversized, empty
fn reject(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            message: message.to_string(),
        }),
    )
        .into_response()
}
