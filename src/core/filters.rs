use crate::models::{Swipe, User};
use std::collections::HashSet;
use uuid::Uuid;

/// Stage 1: candidate shares the requester's zone (exact string match)
#[inline]
pub fn in_same_zone(candidate: &User, requester: &User) -> bool {
    candidate.zone_id == requester.zone_id
}

/// Stage 2: candidate is not the requester
#[inline]
pub fn is_not_self(candidate: &User, requester_id: Uuid) -> bool {
    candidate.id != requester_id
}

/// Stage 3: requester has not swiped on the candidate yet
#[inline]
pub fn is_unseen(candidate: &User, seen: &HashSet<Uuid>) -> bool {
    !seen.contains(&candidate.id)
}

/// Build the set of users already swiped on, whatever the action
pub fn seen_set(swipes: &[Swipe]) -> HashSet<Uuid> {
    swipes.iter().map(|swipe| swipe.swiped_id).collect()
}
