use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Registered user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: String,
    /// Opaque discovery grouping key, compared by exact equality
    pub zone_id: String,
}

/// Validated registration input; the identifier is assigned on insert
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub zone_id: String,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            zone_id: self.zone_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "LIKE",
            SwipeAction::Pass => "PASS",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an action tag is neither `LIKE` nor `PASS`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown swipe action: {0}")]
pub struct UnknownSwipeAction(pub String);

impl FromStr for SwipeAction {
    type Err = UnknownSwipeAction;

    // Tags are case-sensitive on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(SwipeAction::Like),
            "PASS" => Ok(SwipeAction::Pass),
            other => Err(UnknownSwipeAction(other.to_string())),
        }
    }
}

/// Directed, timestamped swipe from one user onto another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swipe {
    pub swiper_id: Uuid,
    pub swiped_id: Uuid,
    pub action: SwipeAction,
    pub timestamp: DateTime<Utc>,
}

impl Swipe {
    pub fn new(swiper_id: Uuid, swiped_id: Uuid, action: SwipeAction) -> Self {
        Self {
            swiper_id,
            swiped_id,
            action,
            timestamp: Utc::now(),
        }
    }

    pub fn is_like(&self) -> bool {
        self.action == SwipeAction::Like
    }
}

/// Mutual match between two users
///
/// `user1_id` is the user whose LIKE completed the mutual condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Match {
    pub fn new(user1_id: Uuid, user2_id: Uuid) -> Self {
        Self {
            user1_id,
            user2_id,
            timestamp: Utc::now(),
        }
    }

    /// True if the user appears on either side of the match
    #[inline]
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_action_parse() {
        assert_eq!("LIKE".parse::<SwipeAction>(), Ok(SwipeAction::Like));
        assert_eq!("PASS".parse::<SwipeAction>(), Ok(SwipeAction::Pass));
        assert!("like".parse::<SwipeAction>().is_err());
        assert!("SUPERLIKE".parse::<SwipeAction>().is_err());
    }

    #[test]
    fn test_unknown_swipe_action_message() {
        let err = "SUPERLIKE".parse::<SwipeAction>().unwrap_err();
        assert_eq!(err, UnknownSwipeAction("SUPERLIKE".to_string()));
        assert_eq!(err.to_string(), "unknown swipe action: SUPERLIKE");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "unknown swipe action: SUPERLIKE");
    }

    #[test]
    fn test_swipe_action_serializes_uppercase() {
        let json = serde_json::to_string(&SwipeAction::Like).unwrap();
        assert_eq!(json, "\"LIKE\"");
    }

    #[test]
    fn test_match_involves_both_sides() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let m = Match::new(a, b);

        assert!(m.involves(a));
        assert!(m.involves(b));
        assert!(!m.involves(Uuid::new_v4()));
    }

    #[test]
    fn test_user_json_fields() {
        let user = NewUser {
            name: "Alice".to_string(),
            age: 28,
            gender: "female".to_string(),
            zone_id: "zone-a".to_string(),
        }
        .into_user(Uuid::new_v4());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["zone_id"], "zone-a");
        assert_eq!(value["age"], 28);
    }
}
