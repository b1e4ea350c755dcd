//! Submit-time blank checks for the login form.

use validator::Validate;

use crate::domain::entities::{Credentials, FieldErrors};
use crate::error::LoginError;

/// Result of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl Validation {
    /// Turns a failed pass into [`LoginError::Validation`].
    pub fn into_result(self) -> Result<(), LoginError> {
        if self.valid {
            Ok(())
        } else {
            Err(LoginError::Validation(self.errors))
        }
    }
}

/// Checks that neither field is blank.
///
/// A field is blank when it is empty after trimming. Email format and
/// password strength are not inspected.
pub fn validate(credentials: &Credentials) -> Validation {
    let errors = match credentials.validate() {
        Ok(()) => FieldErrors::default(),
        Err(report) => {
            let field_errors = report.field_errors();
            let message_for = |field: &str| {
                field_errors
                    .get(field)
                    .and_then(|errors| errors.first())
                    .and_then(|error| error.message.as_ref())
                    .map(|message| message.to_string())
                    .unwrap_or_default()
            };
            FieldErrors {
                email: message_for("email"),
                password: message_for("password"),
            }
        }
    };

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}
