// Cache store for merged user records.
// Insertion-ordered, write-once mapping from looked-up username to profile.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::github::UserProfile;

/// Cached profile with metadata.
#[derive(Debug, Clone)]
pub struct CachedProfile {
    /// The cached profile.
    pub profile: UserProfile,
    /// When the profile was cached.
    pub cached_at: DateTime<Utc>,
}

impl CachedProfile {
    /// Create a new cache entry stamped with the current time.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            cached_at: Utc::now(),
        }
    }
}

/// In-memory user cache. Keys are exact, case-sensitive usernames.
#[derive(Debug, Default)]
pub struct UserCache {
    entries: HashMap<String, CachedProfile>,
    order: Vec<String>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a profile by the exact key it was stored under.
    pub fn get(&self, username: &str) -> Option<&UserProfile> {
        self.entries.get(username).map(|entry| &entry.profile)
    }

    /// Store a profile. Returns false and keeps the existing entry if the key is taken.
    pub fn insert(&mut self, username: &str, profile: UserProfile) -> bool {
        if self.entries.contains_key(username) {
            return false;
        }

        self.entries
            .insert(username.to_string(), CachedProfile::new(profile));
        self.order.push(username.to_string());
        true
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &CachedProfile> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// All profiles in insertion order.
    pub fn profiles(&self) -> impl Iterator<Item = &UserProfile> {
        self.entries().map(|entry| &entry.profile)
    }

    /// Profiles with a repository whose name contains `fragment`, ignoring case.
    pub fn search_repositories(&self, fragment: &str) -> Vec<&UserProfile> {
        self.profiles()
            .filter(|profile| profile.has_repository_matching(fragment))
            .collect()
    }
}
