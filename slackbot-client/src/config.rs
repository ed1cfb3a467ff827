//! Client configuration.

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

const DEFAULT_CLIENT_NAME: &str = concat!("slackbot-client/", env!("CARGO_PKG_VERSION"));

/// Settings for constructing a [`crate::Bot`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Workspace token, sent as a query parameter on every call.
    pub token: String,
    /// API root, without a trailing slash.
    pub base_url: String,
    /// User-Agent string for outgoing requests.
    pub client_name: String,
}

impl BotConfig {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Overrides the API root, mainly for tests.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
        }
    }
}
