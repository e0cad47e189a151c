// Cache-backed user repository.
// Serves user lookups from the session cache, fetching from GitHub on a miss.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cache::{CachedProfile, UserCache};
use crate::error::Result;
use crate::github::{RepoResponse, UserProfile, UserResponse};

/// Remote source of user profiles and repository lists.
///
/// `Ok(None)` means the request succeeded but carried no body.
#[async_trait]
pub trait UserApi {
    async fn fetch_user(&self, username: &str) -> Result<Option<UserResponse>>;

    async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<RepoResponse>>>;
}

/// Outcome of a fetch-or-cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// Served from the cache without touching the network.
    Cached(UserProfile),
    /// Fetched from the remote API and now cached.
    Fetched(UserProfile),
    /// The profile request succeeded without a body.
    NotFound,
}

impl UserLookup {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            UserLookup::Cached(profile) | UserLookup::Fetched(profile) => Some(profile),
            UserLookup::NotFound => None,
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, UserLookup::Cached(_))
    }
}

/// User lookups backed by a session cache.
pub struct GitHubRepository<A> {
    api: A,
    cache: UserCache,
}

impl<A: UserApi> GitHubRepository<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: UserCache::new(),
        }
    }

    /// Return a cached user or fetch profile and repositories, then cache the merged record.
    ///
    /// Nothing is cached unless both requests succeed. A profile fetched before a
    /// failed repository request is discarded.
    pub async fn get_user(&mut self, username: &str) -> Result<UserLookup> {
        if let Some(profile) = self.cache.get(username) {
            debug!(username, "cache hit");
            return Ok(UserLookup::Cached(profile.clone()));
        }
        debug!(username, "cache miss");

        let user = match self.api.fetch_user(username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(username, "profile response had no body");
                return Ok(UserLookup::NotFound);
            }
            Err(e) => {
                debug!(username, status = e.status(), error = %e, "failed to fetch user profile");
                return Err(e);
            }
        };

        let repos = match self.api.fetch_repositories(username).await {
            Ok(repos) => repos.unwrap_or_default(),
            Err(e) => {
                debug!(username, status = e.status(), error = %e, "failed to fetch repositories");
                return Err(e);
            }
        };

        let profile = UserProfile::merge(user, repos);
        info!(
            username,
            login = %profile.username,
            repositories = profile.repositories.len(),
            "fetched user"
        );
        self.cache.insert(username, profile.clone());

        Ok(UserLookup::Fetched(profile))
    }

    /// All cached users with their cache time, oldest first.
    pub fn cached_users(&self) -> Vec<&CachedProfile> {
        self.cache.entries().collect()
    }

    /// Exact-key cache lookup. Never fetches.
    pub fn search_user(&self, username: &str) -> Option<&UserProfile> {
        self.cache.get(username)
    }

    /// Cached users owning a repository whose name contains `fragment`, ignoring case.
    pub fn search_by_repository(&self, fragment: &str) -> Vec<&UserProfile> {
        self.cache.search_repositories(fragment)
    }
}
