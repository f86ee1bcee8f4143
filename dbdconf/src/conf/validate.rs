//! Pure validation predicates for configuration values.
//!
//! One function per semantic family. All functions take the canonical
//! on-disk string form and return [`Error::InvalidValue`] naming the
//! offending value; none of them mutate anything, so a rejected set leaves
//! the document untouched.

use crate::conf::token::{ConfigToken, ValueKind};
use crate::error::{Error, Result};

/// Validate a raw string against a token's value kind.
///
/// This is the single entry point the editor uses on every set; dispatch
/// is driven by [`ConfigToken::kind`].
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if the value fails the token's check.
pub fn check_value(token: ConfigToken, value: &str) -> Result<()> {
    let key = token.as_str();
    match token.kind() {
        ValueKind::Text => Ok(()),
        ValueKind::Bool => check_bool(key, value),
        ValueKind::Number => check_number(key, value),
        ValueKind::Port => check_port(key, value),
        ValueKind::Keyword(allowed) => check_keyword(key, value, allowed),
        ValueKind::List { delimiter, allowed } => {
            for element in value.split(delimiter) {
                if let Some(allowed) = allowed {
                    check_keyword(key, element, allowed)?;
                }
            }
            Ok(())
        }
        ValueKind::Pairs => check_pairs(key, value),
        ValueKind::Duration => check_duration(key, value),
        ValueKind::QueryRange => check_query_range(key, value),
        ValueKind::Password => check_password(key, value),
    }
}

/// Check a boolean value: must be exactly `yes` or `no`.
pub fn check_bool(key: &'static str, value: &str) -> Result<()> {
    if value == "yes" || value == "no" {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            key,
            reason: format!("not a valid boolean value: {value}"),
        })
    }
}

/// Check a numeric value: one or more decimal digits.
pub fn check_number(key: &'static str, value: &str) -> Result<()> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            key,
            reason: format!("not a valid number: {value}"),
        })
    }
}

/// Check a port number: a string of 1-5 decimal digits.
///
/// Digit count is the only constraint; `99999` passes even though it is
/// outside the 16-bit port range. See DESIGN.md for why this laxity is
/// kept.
pub fn check_port(key: &'static str, value: &str) -> Result<()> {
    let digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if digits && value.len() <= 5 {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            key,
            reason: format!("not a valid port number: {value}"),
        })
    }
}

/// Check membership of a fixed keyword set.
pub fn check_keyword(key: &'static str, value: &str, allowed: &'static [&'static str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            key,
            reason: format!("{value} is not one of {}", allowed.join(", ")),
        })
    }
}

/// Check a comma-joined `key=value` pair list.
///
/// Every comma-separated element must contain at least one `=`.
pub fn check_pairs(key: &'static str, value: &str) -> Result<()> {
    for element in value.split(',') {
        if !element.contains('=') {
            return Err(Error::InvalidValue {
                key,
                reason: format!("not a key=value pair: {element}"),
            });
        }
    }
    Ok(())
}

/// Check a retention duration: `<digits><unit>` with unit `hour`, `day`,
/// or `month`.
pub fn check_duration(key: &'static str, value: &str) -> Result<()> {
    let numeric = value
        .strip_suffix("month")
        .or_else(|| value.strip_suffix("hour"))
        .or_else(|| value.strip_suffix("day"));
    match numeric {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(Error::InvalidValue {
            key,
            reason: format!("not a valid time format: {value}"),
        }),
    }
}

/// Check a query time range: `N-N:N:N`, `N-N`, `N:N:N`, `N:N`, or the
/// literal `INFINITE`.
pub fn check_query_range(key: &'static str, value: &str) -> Result<()> {
    if value == "INFINITE" || is_query_range(value) {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            key,
            reason: format!("not a valid max query time format: {value}"),
        })
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_query_range(value: &str) -> bool {
    // Grammar: days-hours[:minutes:seconds] or hours:minutes[:seconds].
    let (days, clock) = match value.split_once('-') {
        Some((days, rest)) => (Some(days), rest),
        None => (None, value),
    };
    if let Some(days) = days {
        if !is_digits(days) {
            return false;
        }
        // `N-N` or `N-N:N:N`
        let parts: Vec<&str> = clock.split(':').collect();
        matches!(parts.len(), 1 | 3) && parts.into_iter().all(is_digits)
    } else {
        // `N:N` or `N:N:N`
        let parts: Vec<&str> = clock.split(':').collect();
        matches!(parts.len(), 2 | 3) && parts.into_iter().all(is_digits)
    }
}

/// Check a password: must not contain `#`, the comment marker.
pub fn check_password(key: &'static str, value: &str) -> Result<()> {
    if value.contains('#') {
        Err(Error::InvalidValue {
            key,
            reason: "password cannot contain '#'".to_string(),
        })
    } else {
        Ok(())
    }
}
