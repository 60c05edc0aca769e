use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::messages::NewContactMessage;

/// Body of `POST /api/contact`. Absent fields deserialize as empty so they
/// are reported by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Trimmed submission, checked before anything is written.
#[derive(Debug, Validate)]
struct ContactForm {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    name: String,
    #[validate(email(message = "must be a valid email address"))]
    email: String,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    message: String,
}

/// Checks a contact submission and returns the row to insert.
/// Rules apply to trimmed values; every violated field is reported.
pub fn validate_contact(req: &ContactRequest) -> Result<NewContactMessage, ValidationErrors> {
    let form = ContactForm {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        message: req.message.trim().to_string(),
    };
    form.validate()?;

    Ok(NewContactMessage {
        name: form.name,
        email: form.email,
        message: form.message,
    })
}
