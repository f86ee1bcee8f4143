//! Semantic values and their canonical string forms.
//!
//! The document stores every value as its on-disk string; [`Value`] is the
//! typed view the accessors convert to and from on every access. Keeping
//! the conversion on the access path (rather than decoding once at load)
//! means the stored text is always authoritative, even if validators
//! evolve between load and use.

use serde::Serialize;

use crate::conf::token::{ConfigToken, ValueKind};
use crate::error::{Error, Result};

/// The semantic value of one configuration entry.
///
/// Which variant applies to a token is determined by its
/// [`kind`](ConfigToken::kind); conversions in both directions live here.
///
/// # Examples
///
/// ```
/// use dbdconf::conf::{ConfigToken, Value};
///
/// let stored = Value::Bool(true).to_storage(ConfigToken::TrackWCKey).unwrap();
/// assert_eq!(stored, "yes");
///
/// let value = Value::from_storage(ConfigToken::TrackWCKey, "yes");
/// assert_eq!(value, Value::Bool(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Free-form text (also passwords, keywords, durations, ranges).
    Text(String),
    /// A `yes`/`no` flag.
    Bool(bool),
    /// A decimal number.
    Number(u64),
    /// A delimiter-joined list.
    List(Vec<String>),
    /// A list of `key=value` pairs.
    Pairs(Vec<(String, String)>),
}

impl Value {
    /// Convert this value to the canonical on-disk string for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when the variant does not fit the
    /// token's kind (for example a [`Value::Bool`] for `DbdPort`).
    pub fn to_storage(&self, token: ConfigToken) -> Result<String> {
        let mismatch = || Error::InvalidValue {
            key: token.as_str(),
            reason: format!("{self:?} does not fit a {:?} key", token.kind()),
        };

        match (token.kind(), self) {
            (
                ValueKind::Text
                | ValueKind::Keyword(_)
                | ValueKind::Duration
                | ValueKind::QueryRange
                | ValueKind::Password,
                Self::Text(text),
            ) => Ok(text.clone()),

            (ValueKind::Bool, Self::Bool(flag)) => {
                Ok(if *flag { "yes" } else { "no" }.to_string())
            }
            // The on-disk spelling is also accepted directly.
            (ValueKind::Bool, Self::Text(text)) => Ok(text.clone()),

            (ValueKind::Number | ValueKind::Port, Self::Number(n)) => Ok(n.to_string()),
            (ValueKind::Number | ValueKind::Port, Self::Text(text)) => Ok(text.clone()),

            (ValueKind::List { delimiter, .. }, Self::List(elements)) => {
                Ok(elements.join(&delimiter.to_string()))
            }
            // A bare string is a one-element list.
            (ValueKind::List { .. }, Self::Text(text)) => Ok(text.clone()),

            (ValueKind::Pairs, Self::Pairs(pairs)) => Ok(pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",")),

            _ => Err(mismatch()),
        }
    }

    /// Interpret a stored string as the semantic value for `token`.
    ///
    /// Boolean text other than `yes`/`no` and non-numeric text under a
    /// numeric kind fall back to [`Value::Text`], mirroring the fact that
    /// load never validates: the typed getters on the editor surface those
    /// cases as errors or absence as appropriate.
    #[must_use]
    pub fn from_storage(token: ConfigToken, raw: &str) -> Self {
        match token.kind() {
            ValueKind::Text
            | ValueKind::Keyword(_)
            | ValueKind::Duration
            | ValueKind::QueryRange
            | ValueKind::Password => Self::Text(raw.to_string()),

            ValueKind::Bool => match raw {
                "yes" => Self::Bool(true),
                "no" => Self::Bool(false),
                other => Self::Text(other.to_string()),
            },

            ValueKind::Number | ValueKind::Port => match raw.parse::<u64>() {
                Ok(n) => Self::Number(n),
                Err(_) => Self::Text(raw.to_string()),
            },

            ValueKind::List { delimiter, .. } => {
                Self::List(raw.split(delimiter).map(str::to_string).collect())
            }

            ValueKind::Pairs => Self::Pairs(
                raw.split(',')
                    .map(|element| match element.split_once('=') {
                        Some((k, v)) => (k.to_string(), v.to_string()),
                        None => (element.to_string(), String::new()),
                    })
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(elements: Vec<String>) -> Self {
        Self::List(elements)
    }
}
