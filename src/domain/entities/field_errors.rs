//! Per-field inline error messages.

use serde::Serialize;

use super::credentials::Field;

/// Message shown under both fields when no user record matches.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message shown under both fields when the user directory cannot be read.
pub const FETCH_FAILED: &str = "Error occurred while fetching data";

/// Inline error text for each input field.
///
/// An empty string means the field has no error to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: String,
    pub password: String,
}

impl FieldErrors {
    /// Sets the same message on both fields.
    ///
    /// Used for remote failures, which never say which field was wrong.
    pub fn both(message: &str) -> Self {
        Self {
            email: message.to_string(),
            password: message.to_string(),
        }
    }

    /// Returns the message for `field`, or `None` if it has no error.
    pub fn get(&self, field: Field) -> Option<&str> {
        let message = match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        };
        (!message.is_empty()).then_some(message.as_str())
    }

    /// Returns true if neither field has an error.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }

    /// Resets both messages to empty.
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}
