use serde_json::Value;
use thiserror::Error;

use crate::config::SUPPORT_EMAIL;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("browser window is not available")]
    NoWindow,
    #[error("could not open the mail client: {0}")]
    MailHandoff(String),
    #[error("could not build the request: {0}")]
    Request(String),
    #[error("{0}")]
    Transport(String),
}

/// Classified result of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(String),
    ValidationError(String),
    ServerError(String),
    TransportError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg)
            | Outcome::ValidationError(msg)
            | Outcome::ServerError(msg)
            | Outcome::TransportError(msg) => msg,
        }
    }

    pub fn tone(&self) -> StatusTone {
        if self.is_success() {
            StatusTone::Success
        } else {
            StatusTone::Error
        }
    }

    pub fn success() -> Self {
        Outcome::Success("Thank you! Your message has been sent. We'll be in touch within 24 hours.".to_string())
    }

    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Outcome::TransportError(format!(
            "Network error: {}. Please email us directly at {}",
            reason, SUPPORT_EMAIL
        ))
    }
}

impl From<SubmitError> for Outcome {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Transport(reason) => Outcome::transport(reason),
            other => Outcome::ServerError(format!(
                "There was an error submitting the form ({}). Please email us directly at {}",
                other, SUPPORT_EMAIL
            )),
        }
    }
}

fn field_error_message(entry: &Value) -> Option<String> {
    if let Some(message) = entry.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    entry
        .get("field")
        .and_then(|f| f.as_str())
        .map(|field| format!("{} is invalid", field))
}

/// Turns an endpoint response into an outcome. `body` may be anything,
/// including an empty or non-JSON string. `errors` and `error` are read
/// independently so a malformed one doesn't hide the other.
pub fn classify_response(ok: bool, status: u16, body: &str) -> Outcome {
    if ok {
        return Outcome::success();
    }

    let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let messages: Vec<String> = payload
        .get("errors")
        .and_then(|errors| errors.as_array())
        .map(|errors| errors.iter().filter_map(field_error_message).collect())
        .unwrap_or_default();

    if !messages.is_empty() {
        return Outcome::ValidationError(format!(
            "{}. Please correct the form or email us at {}",
            messages.join(", "),
            SUPPORT_EMAIL
        ));
    }

    match payload.get("error").and_then(|e| e.as_str()) {
        Some(error) if !error.trim().is_empty() => Outcome::ServerError(format!(
            "{}. Please email us directly at {}",
            error, SUPPORT_EMAIL
        )),
        _ => Outcome::ServerError(format!(
            "Oops! There was a problem submitting your form (status {}). Please email us directly at {}",
            status, SUPPORT_EMAIL
        )),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusDisplay {
    pub message: String,
    pub tone: StatusTone,
    pub visible: bool,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self {
            message: String::new(),
            tone: StatusTone::Neutral,
            visible: false,
        }
    }
}

impl StatusDisplay {
    pub fn class_name(&self) -> &'static str {
        match self.tone {
            StatusTone::Neutral => "form-status",
            StatusTone::Success => "form-status success",
            StatusTone::Error => "form-status error",
        }
    }

    pub fn show(&mut self, message: impl Into<String>, tone: StatusTone) {
        self.message = message.into();
        self.tone = tone;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.tone = StatusTone::Neutral;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_is_success() {
        let outcome = classify_response(true, 200, "{\"ok\":true}");
        assert!(outcome.is_success());
        assert_eq!(outcome.tone(), StatusTone::Success);
    }

    #[test]
    fn field_errors_are_joined() {
        let body = r#"{"errors":[{"message":"X"},{"message":"Y"}]}"#;
        let outcome = classify_response(false, 422, body);
        match &outcome {
            Outcome::ValidationError(msg) => {
                assert!(msg.contains("X, Y"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(outcome.tone(), StatusTone::Error);
    }

    #[test]
    fn field_error_without_message_names_the_field() {
        let body = r#"{"errors":[{"field":"email","code":"TYPE_EMAIL"}]}"#;
        let outcome = classify_response(false, 422, body);
        assert!(matches!(outcome, Outcome::ValidationError(_)));
        assert!(outcome.message().contains("email is invalid"));
    }

    #[test]
    fn error_string_becomes_server_error() {
        let outcome = classify_response(false, 400, r#"{"error":"Form not found"}"#);
        assert!(matches!(outcome, Outcome::ServerError(_)));
        assert!(outcome.message().starts_with("Form not found"));
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        let outcome = classify_response(false, 502, "<html>Bad gateway</html>");
        assert!(matches!(outcome, Outcome::ServerError(_)));
        assert!(outcome.message().contains("status 502"));
        assert!(outcome.message().contains(SUPPORT_EMAIL));
    }

    #[test]
    fn null_errors_keep_the_error_string() {
        let outcome = classify_response(false, 400, r#"{"errors":null,"error":"Form not found"}"#);
        assert!(matches!(outcome, Outcome::ServerError(_)));
        assert!(outcome.message().starts_with("Form not found"));
    }

    #[test]
    fn malformed_entries_do_not_drop_good_ones() {
        let outcome = classify_response(false, 422, r#"{"errors":[{"message":"X"},"oops",{"code":1}]}"#);
        match &outcome {
            Outcome::ValidationError(msg) => assert!(msg.starts_with("X. ")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn non_string_error_falls_back_to_generic_message() {
        let outcome = classify_response(false, 500, r#"{"error":{"detail":"boom"}}"#);
        assert!(outcome.message().contains("status 500"));
    }

    #[test]
    fn empty_errors_array_is_not_validation() {
        let outcome = classify_response(false, 500, r#"{"errors":[]}"#);
        assert!(matches!(outcome, Outcome::ServerError(_)));
    }

    #[test]
    fn transport_failure_keeps_reason() {
        let outcome: Outcome = SubmitError::Transport("connection refused".to_string()).into();
        assert!(matches!(outcome, Outcome::TransportError(_)));
        assert!(outcome.message().contains("connection refused"));
        assert_eq!(outcome.tone(), StatusTone::Error);
    }

    #[test]
    fn status_classes() {
        let mut status = StatusDisplay::default();
        assert_eq!(status.class_name(), "form-status");
        assert!(!status.visible);

        status.show("Thanks", StatusTone::Success);
        assert_eq!(status.class_name(), "form-status success");
        assert!(status.visible);

        status.hide();
        assert_eq!(status.class_name(), "form-status");
        assert!(!status.visible);
    }
}
