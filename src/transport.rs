//! Blocking HTTP execution and failure classification.

use crate::error::Error;
use crate::params::WireParams;
use crate::Result;
use bytes::Bytes;
use std::time::Duration;

/// Thin wrapper around a blocking reqwest client.
///
/// One logical call is one POST round trip bounded by the given timeout: no
/// retries, no pipelining. A single transport is safe to share across
/// threads.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::configuration(format!("failed to build http client: {}", e)))?;
        Ok(Self { client })
    }

    /// POST `params` as a url-encoded form and return the raw body bytes.
    ///
    /// Connection failures, elapsed timeouts and body-read failures map to
    /// [`Error::Network`]; non-success statuses map to [`Error::Http`]. Both
    /// carry the request parameters for diagnostics.
    pub fn post_form(&self, url: &str, params: &WireParams, timeout: Duration) -> Result<Bytes> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .form(params)
            .send()
            .map_err(|e| Error::Network {
                reason: e.to_string(),
                request_params: params.clone(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                request_params: params.clone(),
            });
        }

        response.bytes().map_err(|e| Error::Network {
            reason: e.to_string(),
            request_params: params.clone(),
        })
    }
}
