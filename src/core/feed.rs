use crate::core::error::CoreError;
use crate::core::filters::{in_same_zone, is_not_self, is_unseen, seen_set};
use crate::models::User;
use crate::services::InMemoryStore;
use std::sync::Arc;
use uuid::Uuid;

/// Discovery feed generator - implements the three-stage filter pipeline
///
/// # Pipeline Stages
/// 1. Zone filter (exact zone id equality)
/// 2. Self-exclusion
/// 3. Seen-state filter (anyone already liked or passed)
///
/// Candidates are scanned once; the seen set is built once per call, so a
/// feed costs O(users + swipes) rather than O(users * swipes).
#[derive(Debug, Clone)]
pub struct FeedGenerator {
    store: Arc<InMemoryStore>,
}

impl FeedGenerator {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    /// Build the feed for a user
    ///
    /// # Arguments
    /// * `requester_id` - The user asking for candidates
    ///
    /// # Returns
    /// Every stored user passing all three stages, in no particular order.
    /// Fails with [`CoreError::NotFound`] if the requester is not registered.
    pub fn generate_feed(&self, requester_id: Uuid) -> Result<Vec<User>, CoreError> {
        let requester = self
            .store
            .get_user(requester_id)
            .ok_or_else(|| CoreError::NotFound(format!("user {} not found", requester_id)))?;

        let candidates = self.store.list_users();
        let total_candidates = candidates.len();
        let seen = seen_set(&self.store.swipes_by_swiper(requester_id));

        let feed: Vec<User> = candidates
            .into_iter()
            // Stage 1: zone
            .filter(|candidate| in_same_zone(candidate, &requester))
            // Stage 2: self
            .filter(|candidate| is_not_self(candidate, requester_id))
            // Stage 3: already swiped
            .filter(|candidate| is_unseen(candidate, &seen))
            .collect();

        tracing::debug!(
            "Feed for {}: {} of {} users ({} seen)",
            requester_id,
            feed.len(),
            total_candidates,
            seen.len()
        );

        Ok(feed)
    }
}
