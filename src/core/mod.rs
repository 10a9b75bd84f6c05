// Core algorithm exports
pub mod error;
pub mod feed;
pub mod filters;
pub mod profiles;
pub mod swipe;

pub use error::{CoreError, ErrorKind};
pub use feed::FeedGenerator;
pub use filters::{in_same_zone, is_not_self, is_unseen, seen_set};
pub use profiles::ProfileRegistry;
pub use swipe::{SwipeOutcome, SwipeProcessor};
