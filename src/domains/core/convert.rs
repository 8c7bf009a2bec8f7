//! Conversions between SQLite text columns and domain values.

use crate::errors::{DomainError, DomainResult, ValidationError};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Current time at the precision timestamps are stored with
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp the way every `*_created`/`*_updated` column stores it
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp. Accepts RFC 3339 and SQLite's
/// `YYYY-MM-DD HH:MM:SS[.fff]` form for rows written by hand.
pub fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| DomainError::Internal(format!("Invalid date format: {}", value)))
}

/// Parse a decimal column stored as text
pub fn parse_decimal(value: &str, field: &str) -> DomainResult<Decimal> {
    Decimal::from_str(value)
        .map_err(|_| DomainError::Internal(format!("Invalid decimal in {}: {}", field, value)))
}

/// Parse an enumerated column with the enum's own `from_str`
pub fn parse_enum<T>(value: &str, field: &str, from_str: fn(&str) -> Option<T>) -> DomainResult<T> {
    from_str(value).ok_or_else(|| {
        DomainError::Validation(ValidationError::invalid_value(
            field,
            &format!("unknown value '{}'", value),
        ))
    })
}
