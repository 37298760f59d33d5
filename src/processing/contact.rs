//! Contact information extraction

use crate::processing::patterns::{email_regex, phone_regex};
use serde::{Deserialize, Serialize};

/// Value reported when a field has no match in the text.
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn has_email(&self) -> bool {
        self.email != NOT_FOUND
    }

    pub fn has_phone(&self) -> bool {
        self.phone != NOT_FOUND
    }
}

/// First email address in the text, or [`NOT_FOUND`].
pub fn extract_email(text: &str) -> String {
    email_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First phone number in the text, or [`NOT_FOUND`].
pub fn extract_phone(text: &str) -> String {
    phone_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
    }
}
