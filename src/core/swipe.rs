use crate::core::error::CoreError;
use crate::models::{Match, Swipe, SwipeAction};
use crate::services::InMemoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Result of processing a single swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeOutcome {
    pub swipe: Swipe,
    pub matched: bool,
    /// Present only when `matched` is true
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_record: Option<Match>,
}

/// Records swipes and detects mutual likes
///
/// Match detection only looks at swipes already stored before the current
/// one. Persisting the swipe and looking up the reverse swipe are two separate
/// store calls, so two opposite LIKEs submitted at the same moment can both
/// miss each other, or both see each other and create two matches.
#[derive(Debug, Clone)]
pub struct SwipeProcessor {
    store: Arc<InMemoryStore>,
}

impl SwipeProcessor {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    /// Validate, persist and react to a directed swipe
    ///
    /// Checks run in order and nothing is written until all of them pass:
    /// self-swipe, unknown swiper, unknown target.
    pub fn process_swipe(
        &self,
        swiper_id: Uuid,
        swiped_id: Uuid,
        action: SwipeAction,
    ) -> Result<SwipeOutcome, CoreError> {
        if swiper_id == swiped_id {
            return Err(CoreError::Validation("cannot swipe on yourself".to_string()));
        }

        if self.store.get_user(swiper_id).is_none() {
            return Err(CoreError::NotFound(format!("swiper user {} not found", swiper_id)));
        }

        if self.store.get_user(swiped_id).is_none() {
            return Err(CoreError::NotFound(format!("swiped user {} not found", swiped_id)));
        }

        let swipe = Swipe::new(swiper_id, swiped_id, action);
        self.store.append_swipe(swipe.clone());

        tracing::debug!("Recorded swipe: {} -> {} ({})", swiper_id, swiped_id, action);

        let match_record = match action {
            SwipeAction::Like => self.detect_match(swiper_id, swiped_id),
            SwipeAction::Pass => None,
        };

        Ok(SwipeOutcome {
            swipe,
            matched: match_record.is_some(),
            match_record,
        })
    }

    /// Create a match if the target already liked the swiper
    fn detect_match(&self, swiper_id: Uuid, swiped_id: Uuid) -> Option<Match> {
        let reverse = self.store.find_swipe(swiped_id, swiper_id)?;
        if !reverse.is_like() {
            return None;
        }

        let record = Match::new(swiper_id, swiped_id);
        self.store.append_match(record.clone());

        tracing::info!("Mutual match: {} <-> {}", swiper_id, swiped_id);

        Some(record)
    }

    /// List every match involving a registered user
    pub fn matches_for(&self, user_id: Uuid) -> Result<Vec<Match>, CoreError> {
        if self.store.get_user(user_id).is_none() {
            return Err(CoreError::NotFound("user not found".to_string()));
        }

        Ok(self.store.matches_for_user(user_id))
    }
}
