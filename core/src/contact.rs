//! Contact form state: live fields, client-side validation, and the
//! success/error banner shown after a submission.
//!
//! # Design
//! Submission is split into `begin_submit` (validate, lock the form, hand
//! out the payload) and `finish` (apply the backend outcome) so an async
//! host can run the request itself; `submit` chains both over a `Backend`.
//! While a submission is in flight the fields are read-only and a second
//! `begin_submit` is refused.
//! Time is passed in explicitly so the 5 second success banner is testable.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use crate::backend::Backend;
use crate::envelope::FieldErrors;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ContactRequest, ContactResponse};

pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Why `begin_submit` handed out no payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// Only success banners expire.
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactRequest,
    submitting: bool,
    banner: Option<Banner>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit one field. Any error banner is dismissed. Ignored while a
    /// submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.submitting {
            debug!(field = field.as_str(), "edit ignored while submitting");
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        if matches!(&self.banner, Some(b) if b.kind == BannerKind::Error) {
            self.banner = None;
        }
    }

    /// Check the current fields. Messages come back in form order.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let Err(errors) = self.fields.validate() else {
            return Ok(());
        };
        let by_field = errors.field_errors();
        let mut out = FieldErrors::new();
        for field in Field::ALL {
            if let Some(first) = by_field.get(field.as_str()).and_then(|errs| errs.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                out.push(field.as_str(), message);
            }
        }
        Err(out)
    }

    /// Counter shown under the message box.
    pub fn message_progress(&self) -> String {
        format!(
            "{}/{MIN_MESSAGE_CHARS} minimum characters",
            self.fields.message.chars().count()
        )
    }

    /// Validate and lock the form. Invalid input is never sent.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitError> {
        if self.submitting {
            debug!("contact form already submitting");
            return Err(SubmitError::InFlight);
        }
        if let Err(errors) = self.validate() {
            debug!(fields = errors.len(), "contact form blocked by validation");
            return Err(SubmitError::Invalid(errors));
        }
        self.submitting = true;
        self.banner = None;
        Ok(self.fields.clone())
    }

    /// Apply the backend outcome of a submission started at `begin_submit`.
    pub fn finish(&mut self, outcome: Result<ContactResponse, ApiError>, now: Instant) {
        self.submitting = false;
        self.banner = Some(match outcome {
            Ok(response) if response.success => {
                self.fields = ContactRequest::default();
                Banner {
                    kind: BannerKind::Success,
                    message: response.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
                    expires_at: Some(now + SUCCESS_BANNER_TTL),
                }
            }
            Ok(response) => Banner {
                kind: BannerKind::Error,
                message: response.message.unwrap_or_else(|| REJECTED_MESSAGE.to_string()),
                expires_at: None,
            },
            Err(err) => {
                warn!(error = %err, "contact submission failed");
                Banner {
                    kind: BannerKind::Error,
                    message: err.user_message(),
                    expires_at: None,
                }
            }
        });
    }

    /// Validate, send through `backend` and apply the outcome.
    pub fn submit<X: Transport>(
        &mut self,
        backend: &Backend<X>,
        now: Instant,
    ) -> Result<(), SubmitError> {
        let payload = self.begin_submit()?;
        let outcome = backend.submit_contact(&payload);
        self.finish(outcome, now);
        Ok(())
    }

    /// Drop a success banner whose time is up.
    pub fn expire(&mut self, now: Instant) {
        if let Some(Banner {
            expires_at: Some(deadline),
            ..
        }) = &self.banner
        {
            if now >= *deadline {
                self.banner = None;
            }
        }
    }
}
