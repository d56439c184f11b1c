//! Contact form rules: input validation, submission status lifecycle and
//! client IP capture.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{CoreError, FieldErrors};

pub const MIN_NAME_LENGTH: u64 = 2;
pub const MAX_NAME_LENGTH: u64 = 100;
pub const MAX_PHONE_LENGTH: u64 = 20;
pub const MIN_MESSAGE_LENGTH: u64 = 10;

/// Message returned to the submitter after a successful POST.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your submission! We'll get back to you soon.";

/// Contact form payload as posted by the public site.
///
/// Every field has a serde default so that missing fields surface as
/// field-level validation errors rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 100,
        message = "Ensure this field has between 2 and 100 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(min = 10, message = "Ensure this field has at least 10 characters."))]
    pub message: String,

    #[serde(default)]
    #[validate(custom(function = "require_consent"))]
    pub consent_given: bool,
}

impl ContactForm {
    /// Validate the form, normalising blank phone numbers to `None`.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        self.validate()
            .map_err(|e| CoreError::Validation(FieldErrors::from(e)))?;
        Ok(self)
    }
}

fn require_consent(consent_given: &bool) -> Result<(), ValidationError> {
    if *consent_given {
        Ok(())
    } else {
        Err(ValidationError::new("consent_required")
            .with_message("Consent must be given to submit this form.".into()))
    }
}

/// Processing status of a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }

    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status {
            "new" => Ok(ContactStatus::New),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            other => Err(CoreError::invalid(
                "status",
                format!("Invalid status '{other}'. Must be one of: new, read, replied"),
            )),
        }
    }
}

/// Resolve the submitting client's IP address.
///
/// Prefers the first entry of an `X-Forwarded-For` header value (set by the
/// reverse proxy); falls back to the directly connected peer.
pub fn client_ip(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> Option<IpAddr> {
    forwarded_for
        .and_then(|header| header.split(',').next())
        .and_then(|first| first.trim().parse().ok())
        .or(peer)
}
