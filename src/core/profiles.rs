use crate::core::error::CoreError;
use crate::models::{NewUser, User};
use crate::services::InMemoryStore;
use std::sync::Arc;
use uuid::Uuid;

/// Registers users and resolves them by id
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    store: Arc<InMemoryStore>,
}

impl ProfileRegistry {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    /// Assign a fresh identifier and store the user
    pub fn register(&self, new_user: NewUser) -> User {
        let user = new_user.into_user(Uuid::new_v4());
        self.store.put_user(user.clone());

        tracing::info!("Registered user {} in zone {}", user.id, user.zone_id);

        user
    }

    pub fn get(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.store
            .get_user(user_id)
            .ok_or_else(|| CoreError::NotFound("user not found".to_string()))
    }
}
