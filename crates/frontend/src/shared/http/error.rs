use contracts::shared::errors::{flatten_errors, ErrorBody};
use contracts::shared::ErrorMessage;
use thiserror::Error;

/// Failure of an API call as seen by screens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Connection failure, CORS rejection or status 0
    #[error("network error: {0}")]
    Transport(String),

    /// 4xx carrying a field map; messages are already flattened
    #[error("validation failed ({} messages)", .messages.len())]
    Validation {
        status: u16,
        messages: Vec<ErrorMessage>,
    },

    #[error("not found")]
    NotFound,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl RequestError {
    /// Classifies a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 0 {
            return RequestError::Transport("request did not reach the server".to_string());
        }
        if status == 404 {
            return RequestError::NotFound;
        }

        let value: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let parsed = ErrorBody::from_value(&value);

        if (400..500).contains(&status) && parsed.as_ref().and_then(ErrorBody::field_errors).is_some() {
            return RequestError::Validation {
                status,
                messages: flatten_errors(&value),
            };
        }

        let message = parsed
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| body.chars().take(200).collect());
        RequestError::Status { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RequestError::NotFound)
    }

    /// Messages for the message list of a screen
    pub fn messages(&self) -> Vec<ErrorMessage> {
        match self {
            RequestError::Validation { messages, .. } => messages.clone(),
            RequestError::NotFound => vec![ErrorMessage::error(
                "Not found",
                "The requested record does not exist.",
            )],
            RequestError::Status { message, .. } if !message.is_empty() => {
                vec![ErrorMessage::error("Error", message.clone())]
            }
            _ => vec![ErrorMessage::unexpected()],
        }
    }

    /// First message detail, for single-line error boxes
    pub fn summary(&self) -> String {
        self.messages()
            .into_iter()
            .next()
            .map(|m| m.detail)
            .unwrap_or_else(|| self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::Severity;

    #[test]
    fn test_validation_response() {
        let body = r#"{"message":"The given data was invalid.","errors":{"name":["Name is required"]}}"#;
        let error = RequestError::from_response(422, body);
        assert_eq!(
            error,
            RequestError::Validation {
                status: 422,
                messages: vec![ErrorMessage {
                    severity: Severity::Error,
                    summary: "Validation Error".into(),
                    detail: "Name is required".into(),
                }],
            }
        );
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(RequestError::from_response(404, "{}"), RequestError::NotFound);
        assert!(matches!(RequestError::from_response(0, ""), RequestError::Transport(_)));

        let error = RequestError::from_response(500, r#"{"message":"Server Error"}"#);
        assert_eq!(
            error,
            RequestError::Status {
                status: 500,
                message: "Server Error".into()
            }
        );
        assert_eq!(error.summary(), "Server Error");
    }

    #[test]
    fn test_4xx_without_field_map_is_not_validation() {
        let error = RequestError::from_response(403, r#"{"message":"Forbidden"}"#);
        assert!(matches!(error, RequestError::Status { status: 403, .. }));
    }

    #[test]
    fn test_transport_error_shows_generic_message() {
        let error = RequestError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(error.messages(), vec![ErrorMessage::unexpected()]);
    }
}
