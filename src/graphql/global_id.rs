//! Global ID codec
//!
//! A node's Global ID is `base64("<type_name>:<id>")`. Decoding only recovers
//! the numeric id; the type component is informational and is not checked
//! against the entity being paged.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Failure to decode a Global ID or cursor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobalIdError {
    #[error("malformed cursor: not valid base64")]
    InvalidBase64,
    #[error("malformed cursor: not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed cursor: missing ':' separator")]
    MissingSeparator,
    #[error("malformed cursor: `{0}` is not an integer id")]
    InvalidId(String),
}

/// Encode a (type, id) pair as a Global ID
pub fn encode(type_name: &str, id: i64) -> String {
    BASE64.encode(format!("{}:{}", type_name, id))
}

/// Decode a Global ID to its numeric id
pub fn decode(global_id: &str) -> Result<i64, GlobalIdError> {
    let bytes = BASE64
        .decode(global_id)
        .map_err(|_| GlobalIdError::InvalidBase64)?;
    let s = String::from_utf8(bytes).map_err(|_| GlobalIdError::InvalidUtf8)?;

    let (_type_name, id) = s.split_once(':').ok_or(GlobalIdError::MissingSeparator)?;
    id.parse().map_err(|_| GlobalIdError::InvalidId(id.to_string()))
}

/// Decode a raw decimal id
pub fn decode_raw(id: &str) -> Result<i64, GlobalIdError> {
    id.trim()
        .parse()
        .map_err(|_| GlobalIdError::InvalidId(id.to_string()))
}

/// How edge cursors are minted and read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorFormat {
    /// Cursor is the node's Global ID
    #[default]
    GlobalId,
    /// Cursor is the decimal primary key
    RawId,
}

impl CursorFormat {
    pub fn encode(self, type_name: &str, id: i64) -> String {
        match self {
            CursorFormat::GlobalId => encode(type_name, id),
            CursorFormat::RawId => id.to_string(),
        }
    }

    pub fn decode(self, cursor: &str) -> Result<i64, GlobalIdError> {
        match self {
            CursorFormat::GlobalId => decode(cursor),
            CursorFormat::RawId => decode_raw(cursor),
        }
    }
}
