//! Error types for the login form.
//!
//! None of these errors ever escape [`crate::application::form::LoginForm`]:
//! each kind degrades to inline field text. They exist so the services below
//! the form can report what went wrong with `?`.

use thiserror::Error;

use crate::domain::entities::{FETCH_FAILED, FieldErrors, INVALID_CREDENTIALS};

/// Failures while reading the remote user collection.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The endpoint answered with a non-success status code.
    #[error("user directory responded with status {0}")]
    Status(u16),

    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a JSON list of user records.
    #[error("failed to decode user directory response: {0}")]
    Decode(String),
}

/// Reasons a submit attempt did not authenticate.
#[derive(Debug, Error)]
pub enum LoginError {
    /// At least one field was blank.
    #[error("form has blank fields")]
    Validation(FieldErrors),

    /// No record matched the entered email and password.
    #[error("no user matches the entered credentials")]
    AuthMismatch,

    /// The user directory could not be read.
    #[error(transparent)]
    Transport(#[from] DirectoryError),
}

impl LoginError {
    /// Inline messages shown under the fields for this error.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::AuthMismatch => FieldErrors::both(INVALID_CREDENTIALS),
            Self::Transport(_) => FieldErrors::both(FETCH_FAILED),
        }
    }
}
