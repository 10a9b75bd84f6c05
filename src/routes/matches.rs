use actix_web::{web, HttpResponse, Responder};
use crate::models::{ApiResponse, CreateSwipeRequest, HealthResponse, UserIdQuery};
use crate::routes::{core_error_response, unprocessable, AppState};

/// Configure discovery, swipe and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(health_check))
        .route("/feed", web::get().to(get_feed))
        .route("/swipe", web::post().to(create_swipe))
        .route("/matches", web::get().to(get_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.store.stats();

    HttpResponse::Ok().json(
        ApiResponse::success(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
        .with_meta("users", stats.users)
        .with_meta("swipes", stats.swipes)
        .with_meta("matches", stats.matches),
    )
}

/// Discovery feed endpoint
///
/// GET /feed?user_id={userId}
///
/// Returns same-zone users the requester has not swiped on yet, in no
/// particular order.
async fn get_feed(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> impl Responder {
    let user_id = match query.parse() {
        Ok(id) => id,
        Err(message) => return unprocessable(vec![message]),
    };

    tracing::debug!("Generating feed for user: {}", user_id);

    match state.feed.generate_feed(user_id) {
        Ok(feed) => {
            let count = feed.len();
            HttpResponse::Ok().json(ApiResponse::success(feed).with_meta("count", count))
        }
        Err(e) => {
            tracing::warn!("Feed request failed for {}: {}", user_id, e);
            core_error_response(&e)
        }
    }
}

/// Record a swipe
///
/// POST /swipe
///
/// Request body:
/// ```json
/// {
///   "swiper_id": "uuid",
///   "swiped_id": "uuid",
///   "action": "LIKE|PASS"
/// }
/// ```
///
/// Responds with the stored swipe, a `matched` flag, and the `match` record
/// when the swipe completed a mutual like.
async fn create_swipe(
    state: web::Data<AppState>,
    req: web::Json<CreateSwipeRequest>,
) -> impl Responder {
    let (swiper_id, swiped_id, action) = match req.parse() {
        Ok(parsed) => parsed,
        Err(errors) => return unprocessable(errors),
    };

    match state.swipes.process_swipe(swiper_id, swiped_id, action) {
        Ok(outcome) => {
            tracing::info!(
                "Swipe {} -> {} ({}), matched: {}",
                swiper_id,
                swiped_id,
                action,
                outcome.matched
            );
            HttpResponse::Created().json(ApiResponse::success(outcome))
        }
        Err(e) => {
            tracing::warn!("Rejected swipe {} -> {}: {}", swiper_id, swiped_id, e);
            core_error_response(&e)
        }
    }
}

/// List a user's matches
///
/// GET /matches?user_id={userId}
async fn get_matches(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> impl Responder {
    let user_id = match query.parse() {
        Ok(id) => id,
        Err(message) => return unprocessable(vec![message]),
    };

    match state.swipes.matches_for(user_id) {
        Ok(matches) => {
            let count = matches.len();
            HttpResponse::Ok().json(ApiResponse::success(matches).with_meta("count", count))
        }
        Err(e) => core_error_response(&e),
    }
}
