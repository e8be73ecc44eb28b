//! SQLite helper utilities for type conversion
//!
//! SQLite has no array or timestamp types. Multi-value attributes are stored as
//! JSON arrays in TEXT columns and timestamps as ISO-8601 TEXT.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

// ============================================================================
// Array/Vec Helpers (stored as JSON strings in SQLite)
// ============================================================================

/// Deserialize a JSON string from SQLite to a Vec
#[inline]
pub fn json_to_vec<T: DeserializeOwned>(s: &str) -> Vec<T> {
    serde_json::from_str(s).unwrap_or_default()
}

/// Deserialize an optional JSON string to a Vec (returns empty vec if None or invalid)
#[inline]
pub fn json_to_vec_opt<T: DeserializeOwned>(s: Option<&str>) -> Vec<T> {
    match s {
        Some(s) => json_to_vec(s),
        None => Vec::new(),
    }
}

// ============================================================================
// Timestamp Helpers (stored as ISO8601 TEXT in SQLite)
// ============================================================================

/// Parse an ISO8601 string to DateTime
#[inline]
pub fn str_to_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // SQLite's datetime() format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
                .map(|ndt| ndt.and_utc())
                .map_err(|e| anyhow!("Invalid datetime '{}': {}", s, e))
        })
}

/// Parse a calendar date, accepting a full timestamp as well
#[inline]
pub fn str_to_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| str_to_datetime(s).map(|dt| dt.date_naive()))
        .map_err(|e| anyhow!("Invalid date '{}': {}", s, e))
}
