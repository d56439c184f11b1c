//! Contact form submission model.

use folio_core::contact::ContactForm;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub consent_given: bool,
    pub ip_address: Option<String>,
    pub status: String,
    pub submitted_at: Timestamp,
}

/// Insert payload built from a validated [`ContactForm`].
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub consent_given: bool,
    pub ip_address: Option<String>,
}

impl NewContactSubmission {
    pub fn from_form(form: ContactForm, ip_address: Option<String>) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            consent_given: form.consent_given,
            ip_address,
        }
    }
}
