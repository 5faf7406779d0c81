//! Endpoint, version, timeout and namespace configuration.
//!
//! Everything the protocol treats as ambient (which URLs to talk to, which
//! method namespaces exist) is instance data here, defaulted but overridable
//! per client. The consts below only seed [`ApiConfig::default`].

use std::env;
use std::time::Duration;

/// Default endpoint for signed-mode requests.
pub const DEFAULT_LEGACY_URL: &str = "http://api.vk.com/api.php";

/// Default endpoint base for token-mode requests. The fully-qualified method
/// name is appended to this base.
pub const DEFAULT_SECURE_URL: &str = "https://api.vkontakte.ru/method/";

/// Protocol version tag sent as `v` in signed mode.
pub const DEFAULT_VERSION: &str = "3.0";

/// Per-call timeout applied when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Method namespaces recognized by default.
pub const DEFAULT_NAMESPACES: &[&str] = &[
    "secure",
    "ads",
    "messages",
    "likes",
    "friends",
    "groups",
    "photos",
    "wall",
    "newsfeed",
    "notifications",
    "audio",
    "video",
    "docs",
    "places",
    "storage",
    "notes",
    "pages",
    "activity",
    "offers",
    "questions",
    "subscriptions",
    "users",
    "status",
    "polls",
    "account",
    "auth",
    "stats",
];

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Signed-mode endpoint. The whole request is POSTed here.
    pub legacy_url: String,
    /// Token-mode endpoint base; method names are joined onto it.
    pub secure_url: String,
    /// Protocol version tag for signed-mode requests.
    pub version: String,
    /// Timeout for calls that do not pass one explicitly.
    pub default_timeout: Duration,
    /// Registry of recognized method namespaces.
    pub namespaces: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            legacy_url: DEFAULT_LEGACY_URL.to_string(),
            secure_url: DEFAULT_SECURE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            default_timeout: default_timeout_from_env(),
            namespaces: DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ApiConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the signed-mode endpoint.
    pub fn with_legacy_url(mut self, url: impl Into<String>) -> Self {
        self.legacy_url = url.into();
        self
    }

    /// Override the token-mode endpoint base.
    pub fn with_secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = url.into();
        self
    }

    /// Override the protocol version tag.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the default per-call timeout.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Replace the namespace registry.
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `tag` is a recognized namespace.
    pub fn is_namespace(&self, tag: &str) -> bool {
        self.namespaces.iter().any(|n| n == tag)
    }
}

// Env-overridable default (ignored when unparseable).
fn default_timeout_from_env() -> Duration {
    env::var("DOTCALL_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}
