// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses and the merged user record.

use serde::{Deserialize, Serialize};

/// Profile returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub login: String,
    pub followers: u64,
    pub following: u64,
    /// Kept as the API sent it.
    pub created_at: String,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoResponse {
    pub name: String,
}

/// Body of a GitHub error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// User profile merged with the names of the user's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub created_at: String,
    pub repositories: Vec<String>,
}

impl UserProfile {
    /// Merge a profile response with its repository list, keeping repository order.
    pub fn merge(user: UserResponse, repos: Vec<RepoResponse>) -> Self {
        Self {
            username: user.login,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
            repositories: repos.into_iter().map(|repo| repo.name).collect(),
        }
    }

    /// Whether any repository name contains `fragment`, ignoring case.
    pub fn has_repository_matching(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.repositories
            .iter()
            .any(|name| name.to_lowercase().contains(&needle))
    }
}
