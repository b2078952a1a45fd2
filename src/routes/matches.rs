use crate::models::{
    AdviceResponse, CandidatesQuery, CandidatesResponse, FilterCriteria, HealthResponse, Interest,
    LikesResponse, ProfileRequest, ReceiveLikeResponse, ResetResponse, SwipeRequest,
};
use crate::routes::{session_error_response, validation_error_response, AppState};
use crate::seed::{DEFAULT_LOCATION, LOCAL_USER_ID};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure profile, candidate and swipe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/interests", web::get().to(list_interests))
        .route("/profile/register", web::post().to(register))
        .route("/profile", web::get().to(get_profile))
        .route("/profile", web::put().to(update_profile))
        .route("/filters", web::get().to(get_filters))
        .route("/filters", web::put().to(set_filters))
        .route("/candidates", web::get().to(list_candidates))
        .route("/candidates/{id}", web::get().to(get_candidate))
        .route("/candidates/{id}/compatibility", web::get().to(compatibility))
        .route("/candidates/{id}/icebreaker", web::get().to(icebreaker))
        .route("/swipe", web::post().to(swipe))
        .route("/ledger", web::get().to(ledger_stats))
        .route("/ledger/reset", web::post().to(reset_ledger))
        .route("/likes", web::get().to(list_likes))
        .route("/likes/{id}/receive", web::post().to(receive_like))
        .route("/likes/{id}/accept", web::post().to(accept_like))
        .route("/likes/{id}/reject", web::post().to(reject_like))
        .route("/map/markers", web::get().to(map_markers));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.advisor.has_api_key() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Interest vocabulary in display order
async fn list_interests() -> impl Responder {
    let interests: Vec<serde_json::Value> = Interest::ALL
        .iter()
        .map(|interest| serde_json::json!({ "id": interest, "label": interest.label() }))
        .collect();

    HttpResponse::Ok().json(interests)
}

/// Register the local profile
///
/// POST /api/v1/profile/register
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 28,
///   "gender": "male|female",
///   "interests": ["gym", "reading"],
///   "bio": "string"
/// }
/// ```
async fn register(state: web::Data<AppState>, req: web::Json<ProfileRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let profile = req.into_inner().into_profile(LOCAL_USER_ID, DEFAULT_LOCATION);
    let mut session = state.session.lock().await;

    match session.register(profile) {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => session_error_response(e),
    }
}

async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;

    match session.local() {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => session_error_response(e),
    }
}

async fn update_profile(state: web::Data<AppState>, req: web::Json<ProfileRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let mut session = state.session.lock().await;
    let current_location = match session.local() {
        Ok(profile) => profile.location,
        Err(e) => return session_error_response(e),
    };

    let profile = req.into_inner().into_profile(LOCAL_USER_ID, current_location);
    match session.update_profile(profile) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => session_error_response(e),
    }
}

async fn get_filters(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;
    HttpResponse::Ok().json(session.filters())
}

async fn set_filters(state: web::Data<AppState>, req: web::Json<FilterCriteria>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.set_filters(req.into_inner()) {
        Ok(filters) => HttpResponse::Ok().json(filters),
        Err(e) => session_error_response(e),
    }
}

/// Candidates eligible for a view
///
/// GET /api/v1/candidates?view=swipe|map
///
/// The swipe view hides already-decided candidates and its first entry is the
/// next card; the map view shows everyone that passes the filters.
async fn list_candidates(
    state: web::Data<AppState>,
    query: web::Query<CandidatesQuery>,
) -> impl Responder {
    let session = state.session.lock().await;

    match session.candidates(query.view) {
        Ok(result) => HttpResponse::Ok().json(CandidatesResponse {
            view: query.view,
            total_results: result.candidates.len(),
            candidates: result.candidates,
        }),
        Err(e) => session_error_response(e),
    }
}

async fn get_candidate(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session = state.session.lock().await;

    match session.candidate(&path) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => session_error_response(e),
    }
}

/// Advisor blurb on why the local user and a candidate should talk
async fn compatibility(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let candidate_id = path.into_inner();
    let (me, other) = {
        let session = state.session.lock().await;
        match (session.local(), session.candidate(&candidate_id)) {
            (Ok(me), Ok(other)) => (me.clone(), other.clone()),
            (Err(e), _) | (_, Err(e)) => return session_error_response(e),
        }
    };

    let text = state.advisor.analyze_compatibility(&me, &other).await;
    HttpResponse::Ok().json(AdviceResponse { candidate_id, text })
}

/// Advisor-written opening message for a candidate
async fn icebreaker(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let candidate_id = path.into_inner();
    let (me, other) = {
        let session = state.session.lock().await;
        match (session.local(), session.candidate(&candidate_id)) {
            (Ok(me), Ok(other)) => (me.clone(), other.clone()),
            (Err(e), _) | (_, Err(e)) => return session_error_response(e),
        }
    };

    let text = state.advisor.generate_icebreaker(&me, &other).await;
    HttpResponse::Ok().json(AdviceResponse { candidate_id, text })
}

/// Like or pass the head of the swipe queue
///
/// POST /api/v1/swipe
///
/// Request body:
/// ```json
/// { "direction": "like|pass" }
/// ```
async fn swipe(state: web::Data<AppState>, req: web::Json<SwipeRequest>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.swipe(req.direction) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => session_error_response(e),
    }
}

async fn ledger_stats(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;
    HttpResponse::Ok().json(session.ledger().stats())
}

/// Return every decided candidate to the swipe queue
async fn reset_ledger(state: web::Data<AppState>) -> impl Responder {
    let mut session = state.session.lock().await;
    let cleared = session.reset_ledger();
    HttpResponse::Ok().json(ResetResponse { cleared })
}

async fn list_likes(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;
    let likes = session.incoming_likes();

    HttpResponse::Ok().json(LikesResponse {
        count: likes.len(),
        likes,
    })
}

/// Simulate an inbound like from a pool profile
async fn receive_like(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.receive_like(&path) {
        Ok(queued) => HttpResponse::Ok().json(ReceiveLikeResponse {
            queued,
            pending: session.incoming_likes().len(),
        }),
        Err(e) => session_error_response(e),
    }
}

async fn accept_like(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.accept_incoming(&path) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => session_error_response(e),
    }
}

async fn reject_like(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mut session = state.session.lock().await;

    match session.reject_incoming(&path) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => session_error_response(e),
    }
}

/// Pins for the map view; clicking one resolves through `/candidates/{id}`
async fn map_markers(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock().await;

    match session.map_markers() {
        Ok(markers) => HttpResponse::Ok().json(markers),
        Err(e) => session_error_response(e),
    }
}
