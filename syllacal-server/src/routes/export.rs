//! ICS export endpoint

use axum::{
    Json, Router,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};

use syllacal_core::{CalendarEvent, generate_ics};

use crate::routes::AppError;

pub fn router() -> Router {
    Router::new().route("/api/export", post(export))
}

/// POST /api/export - serialize events into a downloadable .ics file
async fn export(Json(events): Json<Vec<CalendarEvent>>) -> Result<Response, AppError> {
    let ics = generate_ics(&events)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"syllabus.ics\"",
            ),
        ],
        ics,
    )
        .into_response())
}
