// Route exports
pub mod matches;
pub mod users;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::core::{CoreError, ErrorKind, FeedGenerator, ProfileRegistry, SwipeProcessor};
use crate::models::ApiResponse;
use crate::services::InMemoryStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
    pub profiles: ProfileRegistry,
    pub feed: FeedGenerator,
    pub swipes: SwipeProcessor,
}

impl AppState {
    /// Wire every component to the same store
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            profiles: ProfileRegistry::new(Arc::clone(&store)),
            feed: FeedGenerator::new(Arc::clone(&store)),
            swipes: SwipeProcessor::new(Arc::clone(&store)),
            store,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error));
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error));
    matches::configure(cfg);
    users::configure(cfg);
}

/// Reject malformed JSON bodies with the standard envelope
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::UnprocessableEntity()
        .json(ApiResponse::failure(["invalid JSON in request body"]));
    error::InternalError::from_response(err, response).into()
}

/// Reject query strings that do not deserialize with the standard envelope
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let response = HttpResponse::UnprocessableEntity()
        .json(ApiResponse::failure(["invalid query string"]));
    error::InternalError::from_response(err, response).into()
}

/// 422 response carrying one message per invalid input field
pub(crate) fn unprocessable(messages: Vec<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::failure(messages))
}

/// Map a core error to its HTTP status
pub(crate) fn core_error_response(err: &CoreError) -> HttpResponse {
    let body = ApiResponse::failure([err.to_string()]);
    match err.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
    }
}
