//! Swipe Match - discovery feed and swipe matching service
//!
//! This library holds the in-memory store, the three-stage discovery feed
//! pipeline, swipe processing with mutual match detection, and the HTTP
//! routes exposing them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CoreError, ErrorKind, FeedGenerator, ProfileRegistry, SwipeOutcome, SwipeProcessor};
pub use models::{User, NewUser, Swipe, SwipeAction, Match};
pub use services::{InMemoryStore, StoreStats};
