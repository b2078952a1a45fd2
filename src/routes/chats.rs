use crate::models::{ChatsResponse, ReceiveMessageRequest, SendMessageRequest};
use crate::routes::{session_error_response, validation_error_response, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/chats", web::get().to(list_chats))
        .route("/chats/{id}/open", web::post().to(open_chat))
        .route("/chats/{id}/messages", web::post().to(send_message))
        .route("/chats/{id}/receive", web::post().to(receive_message));
}

async fn list_chats(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;
    let chats = session.chats();

    HttpResponse::Ok().json(ChatsResponse {
        sessions: chats.sessions(),
        active_chat_id: chats.active_id(),
        total_unread: chats.total_unread(),
    })
}

async fn open_chat(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.open_chat(&path) {
        Ok(chat) => HttpResponse::Ok().json(chat),
        Err(e) => session_error_response(e),
    }
}

/// Send a message as the local user
///
/// POST /api/v1/chats/{id}/messages
///
/// Request body:
/// ```json
/// { "text": "string", "isAiGenerated": false }
/// ```
async fn send_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SendMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let mut session = state.session.lock().await;
    match session.send_message(&path, &req.text, req.is_ai_generated) {
        Ok(message) => HttpResponse::Created().json(message),
        Err(e) => session_error_response(e),
    }
}

/// Simulate a message from someone else; counts as unread unless the chat is open
///
/// POST /api/v1/chats/{id}/receive
///
/// Request body:
/// ```json
/// { "senderId": "string", "text": "string" }
/// ```
async fn receive_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ReceiveMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let mut session = state.session.lock().await;
    match session.receive_message(&path, &req.sender_id, &req.text) {
        Ok(message) => HttpResponse::Created().json(message),
        Err(e) => session_error_response(e),
    }
}
