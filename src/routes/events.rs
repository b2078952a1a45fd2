use crate::core::EventDraft;
use crate::models::CreateEventRequest;
use crate::routes::{session_error_response, validation_error_response, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/events", web::get().to(list_events))
        .route("/events", web::post().to(create_event))
        .route("/events/{id}/toggle", web::post().to(toggle_event));
}

async fn list_events(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;
    HttpResponse::Ok().json(session.events())
}

/// Create an event organized by the local user
///
/// POST /api/v1/events
///
/// Every field is optional; the new event's chat becomes the active chat.
async fn create_event(
    state: web::Data<AppState>,
    req: web::Json<CreateEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let req = req.into_inner();
    let draft = EventDraft {
        title: req.title,
        description: req.description,
        date: req.date,
        location_name: req.location_name,
        tags: req.tags.into_iter().collect(),
    };

    let mut session = state.session.lock().await;
    match session.create_event(draft) {
        Ok(event) => HttpResponse::Created().json(event),
        Err(e) => session_error_response(e),
    }
}

/// Join the event, or leave it if already a participant
async fn toggle_event(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.toggle_event(&path) {
        Ok(toggle) => HttpResponse::Ok().json(toggle),
        Err(e) => session_error_response(e),
    }
}
