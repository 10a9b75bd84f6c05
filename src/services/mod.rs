// Service exports
pub mod store;

pub use store::{InMemoryStore, StoreStats};
