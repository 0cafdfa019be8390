//! Server error envelope and its flattening into display messages.
//!
//! Validation failures arrive as `{"message": "...", "errors": {"field": ["msg", ...]}}`.
//! The UI shows them as a flat list of `{severity, summary, detail}` records.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const VALIDATION_SUMMARY: &str = "Validation Error";
pub const GENERIC_SUMMARY: &str = "Error";
pub const GENERIC_DETAIL: &str = "An unexpected error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl ErrorMessage {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::error(VALIDATION_SUMMARY, detail)
    }

    pub fn unexpected() -> Self {
        Self::error(GENERIC_SUMMARY, GENERIC_DETAIL)
    }
}

/// Field-level validation messages in server order.
///
/// Serialized as a JSON map `{"field": ["msg", ...]}`. A bare string value
/// is accepted on input and treated as a single message; a value that is
/// not a map at all reads as no errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, m)| m.is_empty())
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_messages(&self) -> Vec<ErrorMessage> {
        self.entries
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(ErrorMessage::validation))
            .collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Object(map) = Value::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        let entries = map
            .into_iter()
            .map(|(field, value)| {
                let messages = match value {
                    Value::Array(items) => items.into_iter().filter_map(message_text).collect(),
                    other => message_text(other).into_iter().collect(),
                };
                (field, messages)
            })
            .collect();
        Ok(Self { entries })
    }
}

fn message_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Error body as sent by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            message: Some("The given data was invalid.".to_string()),
            errors: Some(errors),
        }
    }

    /// Reads the envelope either at the top level or nested under `error`
    /// (the shape a transport layer produces when it wraps the body).
    pub fn from_value(body: &Value) -> Option<Self> {
        let candidate = if body.get("errors").is_some() || body.get("message").is_some() {
            body
        } else {
            body.get("error")?
        };
        if !candidate.is_object() {
            return None;
        }
        serde_json::from_value(candidate.clone()).ok()
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref().filter(|e| !e.is_empty())
    }
}

/// Flattens a server error body into display messages.
///
/// One `Validation Error` entry per field message. Without a field map the
/// result is a single generic entry carrying the server `message` if any.
pub fn flatten_errors(body: &Value) -> Vec<ErrorMessage> {
    let parsed = ErrorBody::from_value(body);
    if let Some(errors) = parsed.as_ref().and_then(ErrorBody::field_errors) {
        return errors.to_messages();
    }
    match parsed.and_then(|b| b.message).filter(|m| !m.trim().is_empty()) {
        Some(message) => vec![ErrorMessage::error(GENERIC_SUMMARY, message)],
        None => vec![ErrorMessage::unexpected()],
    }
}
