// Client configuration.
// Fixed API location plus the optional access token taken from the environment.

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const USER_AGENT: &str = "ghcache-cli";

/// Settings used to build a `GitHubClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            token: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default config, authenticated when GITHUB_TOKEN is set.
    pub fn from_env() -> Self {
        Self::default().with_token(std::env::var("GITHUB_TOKEN").ok())
    }

    /// Set the access token. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}
