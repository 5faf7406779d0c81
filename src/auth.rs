//! Credentials and request signing.
//!
//! The assembly functions here are pure: timestamp and nonce come in as
//! arguments, so tests can pin them and assert exact signatures. The client
//! feeds them from the system clock and `rand` at call time.

use crate::params::WireParams;
use md5::{Digest, Md5};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Digest used for request signatures.
///
/// A protocol compatibility constant: the remote service computes the same
/// digest over the same input, so substituting another algorithm breaks
/// verification. Recorded as data about the wire protocol, not a tunable.
pub const SIGNATURE_DIGEST: &str = "md5";

/// Exclusive upper bound for the per-request nonce.
const NONCE_BOUND: u32 = 1 << 30;

/// Authentication material for a client. Exactly one form per client.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Pre-issued bearer token; requests go to the secure endpoint.
    Token(String),
    /// Application id/secret pair; every request is signed and sent to the
    /// legacy endpoint.
    App { id: String, secret: String },
}

impl Credentials {
    pub(crate) fn mode(&self) -> &'static str {
        match self {
            Credentials::Token(_) => "token",
            Credentials::App { .. } => "signed",
        }
    }
}

/// Hex signature over a wire parameter set.
///
/// Concatenates `key=value` for each key in ascending lexicographic order,
/// appends the shared secret, and digests the UTF-8 bytes. Deterministic for
/// a given parameter set.
pub fn signature(secret: &str, params: &WireParams) -> String {
    let mut input = String::new();
    for (key, value) in params {
        input.push_str(key);
        input.push('=');
        input.push_str(value);
    }
    input.push_str(secret);

    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Build the wire parameter set for a signed-mode request.
///
/// Base fields first, caller entries merged over them (caller wins on
/// collision), then `timestamp` stamped. The signature covers the complete
/// set and is added last as `sig`, so the signed set is exactly the set sent
/// over the wire.
pub fn signed_wire_params(
    id: &str,
    secret: &str,
    version: &str,
    method: &str,
    caller: WireParams,
    timestamp: u64,
    nonce: u32,
) -> WireParams {
    let mut params = WireParams::new();
    params.insert("api_id".into(), id.to_string());
    params.insert("method".into(), method.to_string());
    params.insert("format".into(), "JSON".into());
    params.insert("v".into(), version.to_string());
    params.insert("random".into(), nonce.to_string());
    params.extend(caller);
    params.insert("timestamp".into(), timestamp.to_string());

    let sig = signature(secret, &params);
    params.insert("sig".into(), sig);
    params
}

/// Build the wire parameter set for a token-mode request. No signature.
pub fn token_wire_params(token: &str, caller: WireParams, timestamp: u64) -> WireParams {
    let mut params = WireParams::new();
    params.insert("access_token".into(), token.to_string());
    params.extend(caller);
    params.insert("timestamp".into(), timestamp.to_string());
    params
}

pub(crate) fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub(crate) fn nonce() -> u32 {
    rand::thread_rng().gen_range(0..NONCE_BOUND)
}
