use crate::client::core::ApiClient;
use crate::params::Params;
use crate::Result;
use serde_json::Value;
use std::time::Duration;

/// Resolved method descriptor.
///
/// Carries the fully-qualified method name bound to a client; invoking it
/// with parameters is the explicit second step. A descriptor produces exactly
/// the same wire request as passing the qualified name to
/// [`ApiClient::call`].
#[derive(Debug, Clone)]
pub struct MethodRef<'a> {
    client: &'a ApiClient,
    name: String,
}

impl<'a> MethodRef<'a> {
    pub(crate) fn new(client: &'a ApiClient, name: String) -> Self {
        Self { client, name }
    }

    /// Fully-qualified method name this descriptor will invoke.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with the client's default timeout.
    pub fn invoke(&self, params: Params) -> Result<Value> {
        self.client
            .dispatch(&self.name, params, self.client.config.default_timeout)
    }

    /// Invoke, bounding the round trip by `timeout`.
    pub fn invoke_with_timeout(&self, params: Params, timeout: Duration) -> Result<Value> {
        self.client.dispatch(&self.name, params, timeout)
    }
}
