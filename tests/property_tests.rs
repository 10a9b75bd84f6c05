// Property tests for the feed and swipe invariants

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use swipe_match::core::{FeedGenerator, ProfileRegistry, SwipeProcessor};
use swipe_match::models::{NewUser, SwipeAction, User};
use swipe_match::services::InMemoryStore;

const ZONES: [&str; 3] = ["zone-a", "zone-b", "zone-c"];

fn action_strategy() -> impl Strategy<Value = SwipeAction> {
    prop_oneof![Just(SwipeAction::Like), Just(SwipeAction::Pass)]
}

/// Users as zone indices, swipes as (swiper index, swiped index, action)
fn scenario() -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize, SwipeAction)>)> {
    prop::collection::vec(0..ZONES.len(), 1..12).prop_flat_map(|zones| {
        let n = zones.len();
        let swipes = prop::collection::vec((0..n, 0..n, action_strategy()), 0..40);
        (Just(zones), swipes)
    })
}

fn populate(zones: &[usize]) -> (Arc<InMemoryStore>, Vec<User>) {
    let store = Arc::new(InMemoryStore::new());
    let registry = ProfileRegistry::new(Arc::clone(&store));
    let users = zones
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            registry.register(NewUser {
                name: format!("User {}", i),
                age: 20 + i as u32,
                gender: "other".to_string(),
                zone_id: ZONES[*zone].to_string(),
            })
        })
        .collect();
    (store, users)
}

proptest! {
    #[test]
    fn feed_respects_zone_self_and_seen_state((zones, swipes) in scenario()) {
        let (store, users) = populate(&zones);
        let processor = SwipeProcessor::new(Arc::clone(&store));
        let generator = FeedGenerator::new(Arc::clone(&store));

        let mut swiped_on: Vec<HashSet<usize>> = vec![HashSet::new(); users.len()];
        for (from, to, action) in swipes {
            let result = processor.process_swipe(users[from].id, users[to].id, action);
            if from == to {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
                swiped_on[from].insert(to);
            }
        }

        for (i, user) in users.iter().enumerate() {
            let feed: HashSet<_> = generator
                .generate_feed(user.id)
                .unwrap()
                .into_iter()
                .map(|u| u.id)
                .collect();

            let expected: HashSet<_> = users
                .iter()
                .enumerate()
                .filter(|(j, other)| {
                    *j != i && other.zone_id == user.zone_id && !swiped_on[i].contains(j)
                })
                .map(|(_, other)| other.id)
                .collect();

            prop_assert_eq!(feed, expected);
        }
    }

    #[test]
    fn every_match_is_backed_by_two_likes((zones, swipes) in scenario()) {
        let (store, users) = populate(&zones);
        let processor = SwipeProcessor::new(Arc::clone(&store));

        let mut reported = 0;
        for (from, to, action) in swipes {
            if let Ok(outcome) = processor.process_swipe(users[from].id, users[to].id, action) {
                prop_assert_eq!(outcome.matched, outcome.match_record.is_some());
                if outcome.matched {
                    reported += 1;
                }
            }
        }

        prop_assert_eq!(store.stats().matches, reported);

        for user in &users {
            for record in store.matches_for_user(user.id) {
                let forward = store.find_swipe(record.user1_id, record.user2_id);
                let reverse = store.find_swipe(record.user2_id, record.user1_id);
                prop_assert!(forward.is_some() && reverse.is_some());
                prop_assert!(store.get_user(record.user1_id).is_some());
                prop_assert!(store.get_user(record.user2_id).is_some());
            }
        }
    }
}
