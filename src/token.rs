//! Continuation-token codec.
//!
//! A token is the base64 (standard alphabet) encoding of a folder id's
//! canonical string form. Tokens are opaque position markers, not security
//! tokens: callers must pass them back verbatim and never parse them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;
use uuid::Uuid;

/// Failure modes of [`decode_token`].
///
/// `InvalidEncoding` and `NotUtf8` mean the token is malformed;
/// `InvalidCursor` means it decoded to text that is not a record id.
/// "Valid token whose record is gone" is not a codec concern — the
/// pagination engine reports that as a stale token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("token does not decode to UTF-8 text: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
    #[error("token does not decode to a record id: {0}")]
    InvalidCursor(#[from] uuid::Error),
}

/// Encode a cursor (the id of the last record on a page) as an opaque token.
pub fn encode_token(id: Uuid) -> String {
    STANDARD.encode(id.to_string())
}

/// Decode an opaque token back into the cursor id it was minted from.
pub fn decode_token(token: &str) -> Result<Uuid, TokenError> {
    let bytes = STANDARD.decode(token)?;
    let text = String::from_utf8(bytes)?;
    Ok(Uuid::parse_str(&text)?)
}
