//! Value Codec Module
//!
//! Turns caller values into the plain strings a store accepts, and back.
//!
//! Encoding is canonical: strings go out verbatim, everything else as compact JSON.
//! Decoding in [`ValueMode::Typed`] guesses the original type in a fixed order:
//!
//! 1. signed integer, then unsigned integer
//! 2. finite float
//! 3. `true` / `false`
//! 4. `null`
//! 5. JSON object or array
//! 6. otherwise the raw string
//!
//! The guess is lossy for strings that merely look like another type: `"123"` comes
//! back as the number `123`. Use [`ValueMode::Raw`] when string values must round
//! trip exactly.

use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value};

// == Value Mode ==
/// Controls how raw store strings are reinterpreted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Best-effort reconstruction of numbers, booleans, null and JSON structures
    #[default]
    Typed,
    /// Every stored string is returned as a string, untouched
    Raw,
}

impl ValueMode {
    // == Encode ==
    /// Converts a value into its store representation.
    pub fn encode(self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    // == Decode ==
    /// Rebuilds a value from its store representation.
    pub fn decode(self, raw: String) -> Value {
        match self {
            ValueMode::Typed => coerce(raw),
            ValueMode::Raw => Value::String(raw),
        }
    }
}

impl FromStr for ValueMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typed" => Ok(ValueMode::Typed),
            "raw" => Ok(ValueMode::Raw),
            other => Err(format!("unknown value mode '{}'", other)),
        }
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMode::Typed => f.write_str("typed"),
            ValueMode::Raw => f.write_str("raw"),
        }
    }
}

fn coerce(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Value::from(n);
    }
    // from_f64 refuses NaN and infinities, so "inf" and "NaN" stay strings
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }

    match raw.as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(parsed) = serde_json::from_str::<Value>(&raw) {
            if parsed.is_object() || parsed.is_array() {
                return parsed;
            }
        }
    }

    Value::String(raw)
}
