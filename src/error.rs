use crate::params::WireParams;
use serde::Deserialize;
use thiserror::Error;

/// Diagnostic code reported for connection-level failures.
///
/// The remote service never sees these requests, so the wire protocol has no
/// code for them; callers get this fixed value instead.
pub const NETWORK_ERROR_CODE: i64 = 404;

/// Application-level error reported by the remote service.
///
/// Carries the service's own code and message plus the parameters that
/// produced the failure, so a failed call can be reproduced and diagnosed
/// from the error alone.
#[derive(Debug, Clone, PartialEq, Deserialize, Error)]
#[error("api error (code = {code}, message = '{message}')")]
pub struct ApiError {
    #[serde(rename = "error_code", default)]
    pub code: i64,
    #[serde(rename = "error_msg", default)]
    pub message: String,
    #[serde(rename = "request_params", default)]
    pub request_params: serde_json::Value,
}

/// Unified error type for the library.
///
/// Every failure is surfaced to the caller as one of these kinds; nothing is
/// swallowed or retried internally. Callers branch on the kind.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client setup: missing credentials, unparseable endpoint URL,
    /// unrecognized namespace. Raised before any network access.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The connection could not be established or the timeout elapsed.
    #[error("network error: {reason}")]
    Network {
        reason: String,
        request_params: WireParams,
    },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP error (status = {status})")]
    Http {
        status: u16,
        request_params: WireParams,
    },

    /// The remote service reported an application-level error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The body was not the documented JSON envelope.
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Numeric diagnostic code for this failure, when one exists.
    ///
    /// Network failures map to [`NETWORK_ERROR_CODE`], HTTP failures to their
    /// status code, API errors to the remote service's own code.
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Network { .. } => Some(NETWORK_ERROR_CODE),
            Error::Http { status, .. } => Some(i64::from(*status)),
            Error::Api(e) => Some(e.code),
            Error::Configuration { .. } | Error::MalformedResponse { .. } => None,
        }
    }

    /// Parameters of the request that produced this failure, when carried.
    pub fn request_params(&self) -> Option<&WireParams> {
        match self {
            Error::Network { request_params, .. } | Error::Http { request_params, .. } => {
                Some(request_params)
            }
            _ => None,
        }
    }
}
