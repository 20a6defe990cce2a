use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use serde::Serialize;

use super::endpoint::EndpointSubmit;
use super::mail_handoff::MailHandoff;
use super::outcome::{Outcome, StatusDisplay, StatusTone, SubmitError};

pub const SENDING_LABEL: &str = "Sending...";
pub const SENDING_MESSAGE: &str = "Sending your message...";

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub plan: String,
    pub message: String,
}

/// How a submission leaves the page. Chosen once per build in `config`.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStrategy {
    MailClient(MailHandoff),
    #[cfg_attr(not(feature = "form-endpoint"), allow(dead_code))]
    Endpoint(EndpointSubmit),
}

impl SubmissionStrategy {
    pub fn mail_client(to: &str) -> Self {
        SubmissionStrategy::MailClient(MailHandoff::new(to))
    }

    #[cfg(any(test, feature = "form-endpoint"))]
    pub fn endpoint(url: &str) -> Self {
        SubmissionStrategy::Endpoint(EndpointSubmit::new(url))
    }

    pub async fn submit(&self, submission: &FormSubmission) -> Outcome {
        match self {
            SubmissionStrategy::MailClient(handoff) => handoff.submit(submission).await,
            SubmissionStrategy::Endpoint(endpoint) => endpoint.submit(submission).await,
        }
    }

    /// Text that replaces a success message after a delay, if this strategy has one.
    pub fn follow_up(&self) -> Option<&'static str> {
        match self {
            SubmissionStrategy::MailClient(handoff) => Some(handoff.follow_up_message()),
            SubmissionStrategy::Endpoint(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// Identifies one submission so that timers it scheduled can tell whether
/// the status region still belongs to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Submit control and status region of one contact form.
#[derive(Debug)]
pub struct Submitter {
    phase: Phase,
    status: StatusDisplay,
    idle_label: String,
    epoch: u64,
}

impl Submitter {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            phase: Phase::Idle,
            status: StatusDisplay::default(),
            idle_label: idle_label.into(),
            epoch: 0,
        }
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn button_label(&self) -> &str {
        match self.phase {
            Phase::Idle => &self.idle_label,
            Phase::Sending => SENDING_LABEL,
        }
    }

    /// Idle -> Sending. Rejected while a submission is already in flight.
    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.phase == Phase::Sending {
            return Err(SubmitError::InFlight);
        }
        self.phase = Phase::Sending;
        self.epoch += 1;
        self.status.show(SENDING_MESSAGE, StatusTone::Neutral);
        Ok(Ticket(self.epoch))
    }

    /// Sending -> Idle, showing the outcome. Returns whether the status
    /// should be hidden automatically.
    pub fn complete(&mut self, ticket: Ticket, outcome: &Outcome) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        self.phase = Phase::Idle;
        self.status.show(outcome.message(), outcome.tone());
        outcome.is_success()
    }

    /// Replaces the status text if `ticket` still owns a success message.
    pub fn follow_up(&mut self, ticket: Ticket, message: &str) -> bool {
        if ticket.0 != self.epoch || !self.status.visible || self.status.tone != StatusTone::Success {
            return false;
        }
        self.status.message = message.to_string();
        true
    }

    /// Hides the status if no later submission has taken it over.
    pub fn hide_status(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.epoch || self.phase == Phase::Sending {
            return false;
        }
        self.status.hide();
        true
    }
}

/// What a finished submission left behind for the caller to schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
    pub auto_hide: bool,
}

impl Completion {
    /// Follow-up text to show later; only successes get one.
    pub fn follow_up<'a>(&self, text: Option<&'a str>) -> Option<&'a str> {
        text.filter(|_| self.outcome.is_success())
    }
}

/// Claims the submit control and issues the request through `send`.
///
/// The claim happens before this returns, so a second call while the first
/// is still pending fails with `SubmitError::InFlight` without calling
/// `send`. The returned future resolves once the outcome is on display;
/// `reset` clears the form only after a success.
pub fn start_submission<S, F, R>(
    submitter: Rc<RefCell<Submitter>>,
    submission: FormSubmission,
    send: S,
    reset: R,
) -> Result<impl Future<Output = Completion>, SubmitError>
where
    S: FnOnce(FormSubmission) -> F,
    F: Future<Output = Outcome>,
    R: FnOnce(),
{
    let ticket = submitter.borrow_mut().begin()?;
    let pending = send(submission);

    Ok(async move {
        let outcome = pending.await;
        if outcome.is_success() {
            reset();
        }
        let auto_hide = submitter.borrow_mut().complete(ticket, &outcome);
        Completion {
            ticket,
            outcome,
            auto_hide,
        }
    })
}
