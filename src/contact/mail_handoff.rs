use chrono::{DateTime, Local};

use super::outcome::{Outcome, SubmitError};
use super::submission::FormSubmission;

const FOLLOW_UP_MESSAGE: &str = "Form submitted! We'll be in touch within 24 hours.";

/// Hands the submission to the visitor's mail client through a `mailto:` link.
///
/// Delivery can't be observed from the page, so a successful navigation is
/// reported as success.
#[derive(Clone, Debug, PartialEq)]
pub struct MailHandoff {
    to: String,
}

impl MailHandoff {
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }

    pub fn follow_up_message(&self) -> &'static str {
        FOLLOW_UP_MESSAGE
    }

    pub fn compose_body(
        &self,
        submission: &FormSubmission,
        page_url: &str,
        submitted_at: DateTime<Local>,
    ) -> String {
        format!(
            "New NowPV Contact Form Submission\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Phone: {}\n\
             Interested In: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             ---\n\
             Submitted from: {}\n\
             Date: {}",
            submission.name,
            submission.email,
            or_placeholder(&submission.company, "Not provided"),
            or_placeholder(&submission.phone, "Not provided"),
            submission.plan,
            or_placeholder(&submission.message, "No message provided"),
            page_url,
            submitted_at.format("%d/%m/%Y, %H:%M:%S"),
        )
    }

    pub fn mailto_link(&self, submission: &FormSubmission, body: &str) -> String {
        let subject = format!("NowPV Contact Form - {}", submission.name);
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&subject),
            urlencoding::encode(body)
        )
    }

    /// Builds the link and passes it to `open`. Any error from `open` is the
    /// only failure this mode can see.
    pub fn hand_off<F>(
        &self,
        submission: &FormSubmission,
        page_url: &str,
        submitted_at: DateTime<Local>,
        open: F,
    ) -> Outcome
    where
        F: FnOnce(&str) -> Result<(), SubmitError>,
    {
        let body = self.compose_body(submission, page_url, submitted_at);
        let link = self.mailto_link(submission, &body);

        match open(&link) {
            Ok(()) => {
                log::info!("Opened mail client for contact form submission");
                Outcome::Success(
                    "Thank you! Your email client should open with your message. Please send it to complete your submission."
                        .to_string(),
                )
            }
            Err(e) => {
                log::error!("Form submission error: {}", e);
                e.into()
            }
        }
    }

    pub async fn submit(&self, submission: &FormSubmission) -> Outcome {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return SubmitError::NoWindow.into(),
        };
        let location = window.location();
        let page_url = location.href().unwrap_or_default();

        self.hand_off(submission, &page_url, Local::now(), |link| {
            location
                .set_href(link)
                .map_err(|e| SubmitError::MailHandoff(format!("{:?}", e)))
        })
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
