use thiserror::Error;

use super::models::Contact;

/// Reasons a contact fails the optional validation stage
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email '{0}' is not a valid address")]
    InvalidEmail(String),
    #[error("phone '{0}' must contain digits with an optional leading '+'")]
    InvalidPhone(String),
}

/// Checks a decoded contact before it is stored.
///
/// Only runs when `api.validate_contacts` is enabled; identifiers are never
/// checked.
pub fn validate_contact(contact: &Contact) -> Result<(), ContactValidationError> {
    if contact.name.trim().is_empty() {
        return Err(ContactValidationError::EmptyName);
    }

    if !is_valid_email(&contact.email) {
        return Err(ContactValidationError::InvalidEmail(contact.email.clone()));
    }

    if !is_valid_phone(&contact.phone) {
        return Err(ContactValidationError::InvalidPhone(contact.phone.clone()));
    }

    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

// Digits, spaces and dashes, with at most one '+' in front.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}
