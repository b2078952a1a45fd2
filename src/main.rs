use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use f2f_algo::config::{LoggingSettings, Settings};
use f2f_algo::routes::{self, AppState};
use f2f_algo::seed;
use f2f_algo::services::{AdviceCache, GeminiAdvisor};
use f2f_algo::Session;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize logging; `LOG_LEVEL`/`RUST_LOG` and `LOG_FORMAT` override the config file
fn init_tracing(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting F2F matching service...");

    // Advisor (optional credential - degrades to fallback texts)
    let cache = AdviceCache::new(settings.cache.max_entries, settings.cache.ttl_secs);
    let advisor = GeminiAdvisor::new(&settings.advisor, cache).map_err(|e| {
        error!("Failed to build advisor HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    if advisor.has_api_key() {
        info!("Advisor initialized with model {}", settings.advisor.model);
    } else {
        error!("Advisor API key is missing, compatibility and icebreaker texts will use fallbacks");
    }

    // Session seeded with demo data
    let matcher = settings.matcher();
    let mut session = Session::new(seed::demo(), matcher, settings.event_policy());
    if let Err(e) = session.set_filters(settings.default_filters()) {
        warn!("Ignoring configured default filters: {}", e);
    }

    info!(
        "Session seeded with {} candidates, {} events (match threshold: {})",
        session.pool().len(),
        session.events().len(),
        matcher.match_threshold()
    );

    let app_state = AppState::new(session, advisor);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
