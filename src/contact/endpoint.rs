use gloo_net::http::Request;

use super::outcome::{classify_response, Outcome, SubmitError};
use super::submission::FormSubmission;

const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

fn request_body(submission: &FormSubmission) -> Result<String, SubmitError> {
    serde_json::to_string(submission).map_err(|e| SubmitError::Request(e.to_string()))
}

/// A request that never got a response.
fn send_failure(err: gloo_net::Error) -> SubmitError {
    SubmitError::Transport(err.to_string())
}

/// Posts the submission as JSON to a form-processing service.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointSubmit {
    url: String,
}

impl EndpointSubmit {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub async fn submit(&self, submission: &FormSubmission) -> Outcome {
        match self.post(submission).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Form submission error: {}", e);
                e.into()
            }
        }
    }

    async fn post(&self, submission: &FormSubmission) -> Result<Outcome, SubmitError> {
        let body = request_body(submission)?;
        let request = REQUEST_HEADERS
            .iter()
            .fold(Request::post(&self.url), |request, (name, value)| request.header(name, value))
            .body(body);

        let response = request.send().await.map_err(send_failure)?;

        let status = response.status();
        if response.ok() {
            log::info!("Contact form accepted by endpoint (status {})", status);
            return Ok(classify_response(true, status, ""));
        }

        log::warn!("Contact form rejected with status: {}", status);
        // A body we can't read is treated like one we can't parse.
        let body = response.text().await.unwrap_or_default();
        Ok(classify_response(false, status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asks_for_a_json_response() {
        assert!(REQUEST_HEADERS.contains(&("Accept", "application/json")));
        assert!(REQUEST_HEADERS.contains(&("Content-Type", "application/json")));
    }

    #[test]
    fn body_carries_the_form_fields() {
        let submission = FormSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            phone: String::new(),
            plan: "Enterprise".to_string(),
            message: "Six sites".to_string(),
        };
        let body: serde_json::Value = serde_json::from_str(&request_body(&submission).unwrap()).unwrap();

        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["company"], "Analytical Engines Ltd");
        assert_eq!(body["phone"], "");
        assert_eq!(body["plan"], "Enterprise");
        assert_eq!(body["message"], "Six sites");
    }

    #[test]
    fn send_error_becomes_transport_outcome() {
        let err = send_failure(gloo_net::Error::GlooError("connection refused".to_string()));
        assert!(matches!(err, SubmitError::Transport(_)));

        let outcome: Outcome = err.into();
        assert!(matches!(outcome, Outcome::TransportError(_)));
        assert!(outcome.message().contains("connection refused"));
    }
}
