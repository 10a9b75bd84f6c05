use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use crate::models::{ApiResponse, CreateUserRequest};
use crate::routes::{core_error_response, unprocessable, AppState};

/// Configure user registration routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users", web::post().to(create_user))
        .route("/users/", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user));
}

/// Register a user
///
/// POST /users/
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 28,
///   "gender": "string",
///   "zone_id": "string"
/// }
/// ```
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> impl Responder {
    let new_user = match req.into_inner().into_new_user() {
        Ok(new_user) => new_user,
        Err(errors) => {
            tracing::warn!("Rejected user registration: {:?}", errors);
            return unprocessable(errors);
        }
    };

    let user = state.profiles.register(new_user);

    HttpResponse::Created().json(ApiResponse::success(user))
}

/// Fetch a user by id
///
/// GET /users/{id}
///
/// An id that is not a UUID cannot name a user, so it is reported as 404.
async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().json(ApiResponse::failure(["user not found"])),
    };

    tracing::debug!("Fetching user {}", user_id);

    match state.profiles.get(user_id) {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(user)),
        Err(e) => core_error_response(&e),
    }
}
