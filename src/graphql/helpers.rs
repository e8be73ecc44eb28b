//! Shared helpers for node field mapping and lookups

use async_graphql::ID;

use crate::db::sqlite_helpers::{str_to_date, str_to_datetime};

use super::error::ConnectionError;
use super::global_id;

/// Render a stored timestamp as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
///
/// Unparseable values map to `None`.
pub fn format_datetime(s: Option<&str>) -> Option<String> {
    let dt = str_to_datetime(s?).ok()?;
    Some(dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string())
}

/// Render a stored date as `YYYY-MM-DD`
pub fn format_date(s: Option<&str>) -> Option<String> {
    let d = str_to_date(s?).ok()?;
    Some(d.format("%Y-%m-%d").to_string())
}

/// Primary key for a single-node lookup given either a Global ID or a raw id.
///
/// The Global ID takes precedence when both are supplied.
pub fn lookup_id(id: Option<&ID>, raw_id: Option<&ID>) -> Result<i64, ConnectionError> {
    match (id, raw_id) {
        (Some(id), _) => Ok(global_id::decode(id.as_str())?),
        (None, Some(raw)) => Ok(global_id::decode_raw(raw.as_str())?),
        (None, None) => Err(ConnectionError::InvalidArgument(
            "must provide id or a type-specific ID".to_string(),
        )),
    }
}
