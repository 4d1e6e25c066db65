// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque organization identifiers.
//!
//! Organization ids leave the system as URL-safe base64 (no padding) of
//! `cid:<decimal id>`, so raw database keys are never exposed. Decoding
//! accepts only that exact shape.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

const PREFIX: &str = "cid:";

/// Failures while decoding an opaque identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value is not URL-safe base64.
    #[error("Invalid client id encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded bytes are not UTF-8.
    #[error("Client id does not decode to text")]
    InvalidUtf8,

    /// The decoded text lacks the `cid:` prefix.
    #[error("Client id has an unrecognized format")]
    UnrecognizedFormat,

    /// The payload after the prefix is not a non-negative integer.
    #[error("Client id does not contain a valid number: {0}")]
    InvalidNumber(String),
}

/// Encodes an organization id into its opaque boundary form.
#[must_use]
pub fn encode_organization_id(organization_id: i64) -> String {
    URL_SAFE_NO_PAD.encode(format!("{PREFIX}{organization_id}"))
}

/// Decodes an opaque identifier to its canonical numeric string.
///
/// # Errors
///
/// Returns a [`CodecError`] if the value is not a well-formed identifier.
pub fn decode(opaque: &str) -> Result<String, CodecError> {
    decode_organization_id(opaque).map(|id| id.to_string())
}

/// Decodes an opaque identifier to the organization id.
///
/// # Errors
///
/// Returns a [`CodecError`] if the value is not a well-formed identifier.
pub fn decode_organization_id(opaque: &str) -> Result<i64, CodecError> {
    let bytes: Vec<u8> = URL_SAFE_NO_PAD
        .decode(opaque.trim())
        .map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
    let text: String = String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
    let digits: &str = text
        .strip_prefix(PREFIX)
        .ok_or(CodecError::UnrecognizedFormat)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidNumber(digits.to_string()));
    }

    digits
        .parse::<i64>()
        .map_err(|_| CodecError::InvalidNumber(digits.to_string()))
}
