//! Newsletter subscription form state

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::request::{RequestTicket, RequestTracker};
use super::toast::ToastKind;
use crate::api::{ApiError, SubscribeOutcome};

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please enter your email address.")]
    Empty,

    #[error("Please enter a valid email address.")]
    Invalid,
}

/// Trim and check an email address before it is sent anywhere
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(email.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("A subscription request is already in progress.")]
    InFlight,
}

/// User-visible result of a finished submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Subscribed,
    AlreadySubscribed,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Subscribed => "Subscription successful!",
            Notice::AlreadySubscribed => "Email already exists. Please use a different email.",
            Notice::Failed => "Subscription failed. Please try again later.",
        }
    }

    pub fn kind(&self) -> ToastKind {
        match self {
            Notice::Subscribed => ToastKind::Success,
            Notice::AlreadySubscribed | Notice::Failed => ToastKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Handed out when a submission starts; carries the validated address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub email: String,
    request: RequestTicket,
}

impl SubmitTicket {
    /// Whether the form that issued this ticket still wants the response
    pub fn is_current(&self, tracker: &RequestTracker) -> bool {
        tracker.is_current(&self.request)
    }
}

/// Footer subscription form
#[derive(Debug, Clone, Default)]
pub struct SubscriptionForm {
    email: String,
    phase: SubmitPhase,
    success: bool,
    tracker: RequestTracker,
}

impl SubscriptionForm {
    pub fn new(tracker: RequestTracker) -> Self {
        Self {
            tracker,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// The submit control is disabled from submit until the response lands
    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Validate the current input and move to `Submitting`.
    ///
    /// A second submit while one is in flight is refused.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let email = validate_email(&self.email)?;

        self.phase = SubmitPhase::Submitting;
        self.success = false;

        Ok(SubmitTicket {
            email,
            request: self.tracker.begin(),
        })
    }

    /// Apply the response for `ticket`. Returns `None` for a stale ticket.
    pub fn finish(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<SubscribeOutcome, ApiError>,
    ) -> Option<Notice> {
        if !self.tracker.is_current(&ticket.request) {
            debug!("Ignoring subscription response for a superseded request");
            return None;
        }

        self.phase = SubmitPhase::Idle;

        let notice = match result {
            Ok(SubscribeOutcome::Subscribed) => {
                self.success = true;
                Notice::Subscribed
            }
            Ok(SubscribeOutcome::AlreadySubscribed) => Notice::AlreadySubscribed,
            Err(e) => {
                warn!(error = %e, "Subscription failed");
                Notice::Failed
            }
        };

        Some(notice)
    }
}
