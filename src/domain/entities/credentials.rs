//! Credentials entered into the login form.

use validator::{Validate, ValidationError};

/// Message shown under the email field when it is blank on submit.
pub const EMAIL_REQUIRED: &str = "Please enter email";

/// Message shown under the password field when it is blank on submit.
pub const PASSWORD_REQUIRED: &str = "Please enter password";

/// The two input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Current values of the email and password inputs.
///
/// No constraints are enforced when the values are set: empty strings,
/// whitespace and arbitrary text are all accepted. Blank checks run only on
/// submit, through [`crate::domain::validator::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(custom(function = "not_blank", message = "Please enter email"))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Please enter password"))]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from raw field values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// Returns true if both fields are empty strings.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Rejects values that are empty after trimming surrounding whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
