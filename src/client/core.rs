use crate::auth::{self, Credentials};
use crate::client::builder::ApiClientBuilder;
use crate::client::method::MethodRef;
use crate::config::ApiConfig;
use crate::error::Error;
use crate::params::{self, Params};
use crate::response;
use crate::transport::HttpTransport;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for a dotted-method JSON web API.
///
/// Holds the credentials, the default parameters applied to every call, and
/// the endpoint configuration. All of it is immutable after construction, so
/// one client can be shared across threads; the namespace views returned by
/// [`ApiClient::namespace`] are cheap derived values over the same transport.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) credentials: Credentials,
    pub(crate) defaults: Params,
    pub(crate) config: ApiConfig,
    pub(crate) method_prefix: String,
    pub(crate) transport: Arc<HttpTransport>,
}

impl ApiClient {
    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Token-mode client with default configuration.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Signed-mode client with default configuration.
    pub fn with_app_credentials(
        id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        Self::builder().app_credentials(id, secret).build()
    }

    /// Derived view whose calls are prefixed with `"<tag>."`.
    ///
    /// `tag` must be in the configured namespace registry. Resolution is
    /// single level: calling this on a view replaces the prefix rather than
    /// appending to it.
    pub fn namespace(&self, tag: &str) -> Result<Self> {
        if !self.config.is_namespace(tag) {
            return Err(Error::configuration(format!(
                "unrecognized namespace '{}'",
                tag
            )));
        }
        let mut view = self.clone();
        view.method_prefix = format!("{}.", tag);
        Ok(view)
    }

    /// Resolve a method descriptor for a later invocation.
    ///
    /// `name` is taken verbatim (plus any namespace prefix of this view);
    /// names outside the namespace registry are invoked as-is when the
    /// descriptor is called.
    pub fn method(&self, name: &str) -> MethodRef<'_> {
        MethodRef::new(self, format!("{}{}", self.method_prefix, name))
    }

    /// Invoke a method with the configured default timeout.
    pub fn call(&self, method: &str, params: Params) -> Result<Value> {
        self.call_with_timeout(method, params, self.config.default_timeout)
    }

    /// Invoke a method, bounding the round trip by `timeout`.
    pub fn call_with_timeout(
        &self,
        method: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<Value> {
        let full_method = format!("{}{}", self.method_prefix, method);
        self.dispatch(&full_method, params, timeout)
    }

    pub(crate) fn dispatch(
        &self,
        method: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<Value> {
        // Defaults first; call params win on collision.
        let mut merged = self.defaults.clone();
        for (key, value) in params {
            merged.insert(key, value);
        }
        let caller = params::encode_params(&merged);

        let (url, wire) = match &self.credentials {
            Credentials::Token(token) => (
                self.secure_method_url(method)?,
                auth::token_wire_params(token, caller, auth::unix_timestamp()),
            ),
            Credentials::App { id, secret } => (
                self.config.legacy_url.clone(),
                auth::signed_wire_params(
                    id,
                    secret,
                    &self.config.version,
                    method,
                    caller,
                    auth::unix_timestamp(),
                    auth::nonce(),
                ),
            ),
        };

        debug!(method = %method, url = %url, mode = self.credentials.mode(), "dispatching api call");

        let body = self.transport.post_form(&url, &wire, timeout)?;
        response::decode(&body)
    }

    // Token-mode requests address the method by path under the secure base.
    fn secure_method_url(&self, method: &str) -> Result<String> {
        let base = Url::parse(&self.config.secure_url)
            .map_err(|e| Error::configuration(format!("invalid secure endpoint url: {}", e)))?;
        let url = base
            .join(method)
            .map_err(|e| Error::configuration(format!("invalid method path '{}': {}", method, e)))?;
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_client() -> ApiClient {
        ApiClient::with_token("tok").unwrap()
    }

    #[test]
    fn test_namespace_requires_registry_entry() {
        let client = token_client();
        assert!(client.namespace("friends").is_ok());
        assert!(matches!(
            client.namespace("execute"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_namespace_view_shares_defaults() {
        let client = ApiClient::builder()
            .token("tok")
            .default_param("lang", "en")
            .build()
            .unwrap();
        let view = client.namespace("friends").unwrap();
        assert_eq!(view.defaults.get("lang").unwrap(), "en");
        assert_eq!(view.method_prefix, "friends.");
    }

    #[test]
    fn test_namespace_replaces_existing_prefix() {
        let client = token_client();
        let view = client
            .namespace("friends")
            .unwrap()
            .namespace("photos")
            .unwrap();
        assert_eq!(view.method_prefix, "photos.");
    }

    #[test]
    fn test_custom_registry_is_configuration() {
        let client = ApiClient::builder()
            .token("tok")
            .config(ApiConfig::new().with_namespaces(["custom"]))
            .build()
            .unwrap();
        assert!(client.namespace("custom").is_ok());
        assert!(client.namespace("friends").is_err());
    }

    #[test]
    fn test_secure_method_url_joins_base() {
        let client = token_client();
        assert_eq!(
            client.secure_method_url("friends.get").unwrap(),
            "https://api.vkontakte.ru/method/friends.get"
        );
    }
}
