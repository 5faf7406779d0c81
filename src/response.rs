//! Response envelope decoding.

use crate::error::{ApiError, Error};
use crate::Result;
use serde_json::Value;
use std::fmt::Write;

/// Decode a raw response body into the success payload.
///
/// The remote is known to emit raw control characters inside string values,
/// which strict JSON parsing rejects; those are rewritten as `\u00XX` escapes
/// first. An `error` envelope maps to [`Error::Api`]; a body that is not the
/// documented envelope at all maps to [`Error::MalformedResponse`].
pub fn decode(body: &[u8]) -> Result<Value> {
    let text = String::from_utf8_lossy(body);
    let value: Value =
        serde_json::from_str(&sanitize(&text)).map_err(|e| Error::MalformedResponse {
            detail: e.to_string(),
        })?;

    let Value::Object(mut envelope) = value else {
        return Err(Error::MalformedResponse {
            detail: "body is not a JSON object".into(),
        });
    };

    if let Some(error) = envelope.remove("error") {
        let api_error: ApiError =
            serde_json::from_value(error).map_err(|e| Error::MalformedResponse {
                detail: format!("unreadable error envelope: {}", e),
            })?;
        return Err(Error::Api(api_error));
    }

    envelope
        .remove("response")
        .ok_or_else(|| Error::MalformedResponse {
            detail: "missing `response` field".into(),
        })
}

// Escape raw control characters inside string literals. Everything outside
// strings is left for the parser to judge.
fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    for ch in input.chars() {
        if !in_string {
            if ch == '"' {
                in_string = true;
            }
            out.push(ch);
            continue;
        }
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                out.push(ch);
            }
            '"' => {
                in_string = false;
                out.push(ch);
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
