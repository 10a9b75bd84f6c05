// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, NewUser, Swipe, SwipeAction, UnknownSwipeAction, Match};
pub use requests::{CreateUserRequest, CreateSwipeRequest, UserIdQuery};
pub use responses::{ApiResponse, ApiError, HealthResponse};
