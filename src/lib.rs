//! # dotcall
//!
//! Blocking client for remote JSON web APIs that expose methods as dotted
//! names (e.g. `friends.get`) and authenticate either with a pre-issued
//! bearer token or with an application id/secret pair that signs every
//! request.
//!
//! ## Overview
//!
//! A call flows through a fixed pipeline: the dotted method name is resolved
//! (optionally through a namespace view), parameters are merged with the
//! client's defaults and encoded to a canonical wire form, the active
//! credential mode adds its authentication fields (an MD5 signature over the
//! sorted parameter set in signed mode, a bearer token otherwise), and the
//! request is POSTed as a url-encoded form. The response envelope either
//! yields the `response` payload or a typed error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dotcall::{json, ApiClient, Params};
//!
//! fn main() -> dotcall::Result<()> {
//!     let client = ApiClient::builder()
//!         .app_credentials("1234", "top-secret")
//!         .default_param("lang", "en")
//!         .build()?;
//!
//!     let mut params = Params::new();
//!     params.insert("uid".into(), json!(42));
//!     let friends = client.namespace("friends")?.call("get", params)?;
//!     println!("{}", friends);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, namespace views, method descriptors |
//! | [`config`] | Endpoints, protocol version, timeout, namespace registry |
//! | [`params`] | Parameter encoding to the canonical wire form |
//! | [`auth`] | Credentials and request signing |
//! | [`transport`] | Blocking HTTP execution and failure classification |
//! | [`response`] | Response envelope decoding |
//! | [`error`] | Error taxonomy |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod response;
pub mod transport;

// Re-export main types for convenience
pub use auth::Credentials;
pub use client::{ApiClient, ApiClientBuilder, MethodRef};
pub use config::ApiConfig;
pub use error::{ApiError, Error};
pub use params::{Params, WireParams};
pub use transport::HttpTransport;

// Re-export serde_json's value constructor for convenience
pub use serde_json::json;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
