// Cache module for the session user cache.
// Holds merged user records in memory for the lifetime of the process.

pub mod store;

pub use store::{CachedProfile, UserCache};
