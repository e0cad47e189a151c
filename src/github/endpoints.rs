// GitHub API endpoint functions.
// Provides typed methods for fetching user profiles and repository lists.

use async_trait::async_trait;

use crate::error::Result;
use crate::repository::UserApi;

use super::client::GitHubClient;
use super::types::{RepoResponse, UserResponse};

/// Largest page size the repository listing accepts.
const REPOS_PER_PAGE: &str = "100";

fn user_endpoint(username: &str) -> String {
    format!("/users/{}", urlencoding::encode(username))
}

fn repos_endpoint(username: &str) -> String {
    format!("/users/{}/repos", urlencoding::encode(username))
}

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<Option<UserResponse>> {
        let params: &[(&str, &str)] = &[];
        self.get_json(&user_endpoint(username), params).await
    }

    /// Get a user's public repositories (first page).
    pub async fn get_user_repos(&self, username: &str) -> Result<Option<Vec<RepoResponse>>> {
        let params = [("per_page", REPOS_PER_PAGE)];
        self.get_json(&repos_endpoint(username), &params).await
    }
}

#[async_trait]
impl UserApi for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<Option<UserResponse>> {
        self.get_user(username).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<RepoResponse>>> {
        self.get_user_repos(username).await
    }
}
