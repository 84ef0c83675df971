//! This module defines logic to serialize/deserialize fleet state, availability queries and trip
//! requests in pragmatic json format and to map them into core models.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use fleet_core::utils::ScheduleError;
use serde::Serialize;
use std::fmt;

pub mod contract;
pub mod model;
pub mod state;

pub(crate) mod mapping;

/// A format error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormatError {
    /// An error code in registry, set only for fleet state validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// An error kind.
    pub kind: String,
    /// A human readable error description.
    pub message: String,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without code.
    pub fn new(kind: &str, message: String) -> Self {
        Self { code: None, kind: kind.to_string(), message }
    }

    /// Creates a new instance of `FormatError` with code.
    pub fn new_with_code(code: &str, kind: &str, message: String) -> Self {
        Self { code: Some(code.to_string()), kind: kind.to_string(), message }
    }

    /// Creates a new instance of `FormatError` for input which cannot be deserialized.
    pub fn new_malformed(what: &str, err: impl fmt::Display) -> Self {
        Self::new(MALFORMED_INPUT_KIND, format!("cannot deserialize {what}: '{err}'"))
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}, {}", self.kind, self.message),
            None => write!(f, "{}, {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<ScheduleError> for FormatError {
    fn from(err: ScheduleError) -> Self {
        let kind = if err.is_fatal() { INTERNAL_ERROR_KIND } else { err.kind() };

        Self::new(kind, err.to_string())
    }
}

/// Keeps multiple format errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }

    /// Formats multiple format errors into string using given separator.
    pub fn format_many(&self, separator: &str) -> String {
        self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format_many("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

/// An error kind for input which is not a valid json or does not match the schema.
pub const MALFORMED_INPUT_KIND: &str = "MalformedInput";

/// An error kind for broken internal consistency.
pub const INTERNAL_ERROR_KIND: &str = "InternalError";
