use log::Level;

use crate::contact::submission::SubmissionStrategy;

pub const SUPPORT_EMAIL: &str = "contact@ecosite.uk";

/// Success messages disappear after this long. Errors stay until the next submit.
pub const STATUS_HIDE_DELAY_MS: u32 = 10_000;

/// Delay before the mail handoff swaps in its follow-up confirmation.
pub const MAIL_FOLLOW_UP_DELAY_MS: u32 = 2_000;

#[cfg(feature = "form-endpoint")]
pub fn get_form_endpoint() -> &'static str {
    option_env!("NOWPV_FORM_ENDPOINT").unwrap_or("https://formspree.io/f/xnowpvec")
}

#[cfg(feature = "form-endpoint")]
pub fn submission_strategy() -> SubmissionStrategy {
    SubmissionStrategy::endpoint(get_form_endpoint())
}

#[cfg(not(feature = "form-endpoint"))]
pub fn submission_strategy() -> SubmissionStrategy {
    SubmissionStrategy::mail_client(SUPPORT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "form-endpoint"))]
    #[test]
    fn default_build_hands_off_to_mail_client() {
        assert_eq!(submission_strategy(), SubmissionStrategy::mail_client(SUPPORT_EMAIL));
    }

    #[cfg(feature = "form-endpoint")]
    #[test]
    fn endpoint_build_posts_to_form_endpoint() {
        assert_eq!(submission_strategy(), SubmissionStrategy::endpoint(get_form_endpoint()));
    }
}
