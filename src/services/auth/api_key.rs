//! `Authorization: ApiKey <key>` parsing - core logic.
//!
//! This module is intentionally "core-only": it does not know about Axum extractors
//! or any key store. Middleware calls `get_api_key` and decides what a failure
//! means for the response.

use crate::headers::HeaderSource;

/// Scheme token that must prefix the key (compared case-sensitively).
pub const API_KEY_SCHEME: &str = "ApiKey";

const AUTHORIZATION: &str = "authorization";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    MissingHeader,
    #[error("malformed authorization header: {detail}")]
    MalformedHeader { detail: String },
}

/// Failure category, for callers that branch without looking at messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyErrorKind {
    MissingHeader,
    MalformedHeader,
}

impl ApiKeyError {
    fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedHeader {
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ApiKeyErrorKind {
        match self {
            ApiKeyError::MissingHeader => ApiKeyErrorKind::MissingHeader,
            ApiKeyError::MalformedHeader { .. } => ApiKeyErrorKind::MalformedHeader,
        }
    }
}

/// Extract the API key from the first `Authorization` value.
///
/// - Repeated headers: only the first value is read.
/// - Whitespace runs (leading/trailing included) separate tokens.
/// - Exactly two tokens are accepted: `ApiKey` and the key itself.
pub fn get_api_key<H>(headers: &H) -> Result<String, ApiKeyError>
where
    H: HeaderSource + ?Sized,
{
    let raw = headers
        .first_value(AUTHORIZATION)
        .ok_or(ApiKeyError::MissingHeader)?;

    // an empty value reads the same as an absent header
    if raw.is_empty() {
        return Err(ApiKeyError::MissingHeader);
    }

    let value = std::str::from_utf8(raw).map_err(|_| ApiKeyError::malformed("not valid text"))?;

    let mut tokens = value.split_whitespace();
    let (scheme, key) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(scheme), Some(key), None) => (scheme, key),
        (_, _, Some(_)) => return Err(ApiKeyError::malformed("unexpected trailing tokens")),
        _ => return Err(ApiKeyError::malformed("expected `ApiKey <key>`")),
    };

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::malformed("unsupported scheme"));
    }

    Ok(key.to_owned())
}
