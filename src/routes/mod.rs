// Route exports
pub mod chats;
pub mod events;
pub mod matches;

use crate::core::{Session, SessionError};
use crate::models::ErrorResponse;
use crate::services::GeminiAdvisor;
use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across all handlers
///
/// The session is the single owner of matching state; handlers hold the
/// lock only for the duration of one action and never across advisor calls.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub advisor: Arc<GeminiAdvisor>,
}

impl AppState {
    pub fn new(session: Session, advisor: GeminiAdvisor) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            advisor: Arc::new(advisor),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(events::configure)
            .configure(chats::configure),
    );
}

/// Map a session error onto its HTTP status and JSON body
pub fn session_error_response(err: SessionError) -> HttpResponse {
    let (status, error) = match &err {
        SessionError::NotRegistered => (StatusCode::CONFLICT, "not_registered"),
        SessionError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_failed"),
        SessionError::UnknownProfile(_) => (StatusCode::NOT_FOUND, "unknown_profile"),
        SessionError::UnknownEvent(_) => (StatusCode::NOT_FOUND, "unknown_event"),
        SessionError::UnknownChat(_) => (StatusCode::NOT_FOUND, "unknown_chat"),
        SessionError::NotPending(_) => (StatusCode::CONFLICT, "not_pending"),
        SessionError::OrganizerCannotLeave(_) => (StatusCode::CONFLICT, "organizer_cannot_leave"),
    };

    tracing::info!("Session action rejected: {}", err);

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

/// 400 response for request bodies that fail `validator` rules
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
