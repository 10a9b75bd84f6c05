use crate::models::{Match, Swipe, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// In-memory store for users, swipes and matches
///
/// Every operation runs inside one critical section over the whole store, and
/// every returned collection is an owned copy. None of the operations can
/// fail: an unknown identifier is reported as `None` or an empty `Vec`.
///
/// Swipes and matches are append-only logs kept in insertion order. The only
/// way to remove anything is [`InMemoryStore::reset`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<Uuid, User>,
    swipes: Vec<Swipe>,
    matches: Vec<Match>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the state half-written, so a poisoned lock still
    // guards consistent data.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a user, silently replacing any user with the same id
    pub fn put_user(&self, user: User) {
        self.state().users.insert(user.id, user);
    }

    pub fn get_user(&self, id: Uuid) -> Option<User> {
        self.state().users.get(&id).cloned()
    }

    /// Snapshot of all users in unspecified order
    pub fn list_users(&self) -> Vec<User> {
        self.state().users.values().cloned().collect()
    }

    /// Append a swipe to the log; duplicates are kept
    pub fn append_swipe(&self, swipe: Swipe) {
        self.state().swipes.push(swipe);
    }

    /// All swipes made by the given user, in append order
    pub fn swipes_by_swiper(&self, swiper_id: Uuid) -> Vec<Swipe> {
        self.state()
            .swipes
            .iter()
            .filter(|swipe| swipe.swiper_id == swiper_id)
            .cloned()
            .collect()
    }

    /// First swipe from `swiper_id` onto `swiped_id`
    ///
    /// Direction matters: a swipe A→B never satisfies a lookup for B→A.
    pub fn find_swipe(&self, swiper_id: Uuid, swiped_id: Uuid) -> Option<Swipe> {
        self.state()
            .swipes
            .iter()
            .find(|swipe| swipe.swiper_id == swiper_id && swipe.swiped_id == swiped_id)
            .cloned()
    }

    pub fn append_match(&self, record: Match) {
        self.state().matches.push(record);
    }

    /// Matches where the user appears on either side, in append order
    pub fn matches_for_user(&self, user_id: Uuid) -> Vec<Match> {
        self.state()
            .matches
            .iter()
            .filter(|record| record.involves(user_id))
            .cloned()
            .collect()
    }

    /// Drop every user, swipe and match in one step
    pub fn reset(&self) {
        let mut state = self.state();
        *state = StoreState::default();
        tracing::debug!("Store reset");
    }

    /// Collection sizes, read under a single lock
    pub fn stats(&self) -> StoreStats {
        let state = self.state();
        StoreStats {
            users: state.users.len(),
            swipes: state.swipes.len(),
            matches: state.matches.len(),
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub users: usize,
    pub swipes: usize,
    pub matches: usize,
}
