use crate::auth::Credentials;
use crate::client::core::ApiClient;
use crate::config::ApiConfig;
use crate::error::Error;
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Builder for [`ApiClient`].
///
/// Keep this surface small: credentials, default parameters, configuration.
/// Validation happens in [`build`](ApiClientBuilder::build), before any
/// network access.
pub struct ApiClientBuilder {
    credentials: Option<Credentials>,
    defaults: Params,
    config: ApiConfig,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            credentials: None,
            defaults: Params::new(),
            config: ApiConfig::default(),
        }
    }

    /// Authenticate with a pre-issued bearer token.
    ///
    /// Replaces any previously set credential form.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Token(token.into()));
        self
    }

    /// Authenticate by signing every request with an application id/secret
    /// pair.
    ///
    /// Replaces any previously set credential form.
    pub fn app_credentials(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::App {
            id: id.into(),
            secret: secret.into(),
        });
        self
    }

    /// Default parameter applied to every call. Call parameters win on key
    /// collision.
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Override endpoint and namespace configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and assemble the client.
    pub fn build(self) -> Result<ApiClient> {
        let credentials = self.credentials.ok_or_else(|| {
            Error::configuration("either a token or an application id/secret pair is required")
        })?;

        // Bad endpoints fail here rather than on the first call.
        Url::parse(&self.config.legacy_url)
            .map_err(|e| Error::configuration(format!("invalid legacy endpoint url: {}", e)))?;
        Url::parse(&self.config.secure_url)
            .map_err(|e| Error::configuration(format!("invalid secure endpoint url: {}", e)))?;

        Ok(ApiClient {
            credentials,
            defaults: self.defaults,
            config: self.config,
            method_prefix: String::new(),
            transport: Arc::new(HttpTransport::new()?),
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fail_validation() {
        match ApiClientBuilder::new().build() {
            Err(Error::Configuration { message }) => {
                assert!(message.contains("token"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_either_credential_form_builds() {
        assert!(ApiClientBuilder::new().token("tok").build().is_ok());
        assert!(ApiClientBuilder::new()
            .app_credentials("1234", "secret")
            .build()
            .is_ok());
    }

    #[test]
    fn test_last_credential_form_wins() {
        let client = ApiClientBuilder::new()
            .token("tok")
            .app_credentials("1234", "secret")
            .build()
            .unwrap();
        assert!(matches!(client.credentials, Credentials::App { .. }));

        let client = ApiClientBuilder::new()
            .app_credentials("1234", "secret")
            .token("tok")
            .build()
            .unwrap();
        assert!(matches!(client.credentials, Credentials::Token(_)));
    }

    #[test]
    fn test_invalid_endpoint_fails_at_build() {
        let result = ApiClientBuilder::new()
            .token("tok")
            .config(ApiConfig::new().with_secure_url("not a url"))
            .build();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_default_params_recorded() {
        let client = ApiClientBuilder::new()
            .token("tok")
            .default_param("lang", "en")
            .default_param("count", 10)
            .build()
            .unwrap();
        assert_eq!(client.defaults.get("lang").unwrap(), "en");
        assert_eq!(client.defaults.get("count").unwrap(), 10);
    }
}
