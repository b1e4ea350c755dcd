//! Core domain entities of the login form.
//!
//! All entities are ephemeral: they live in a form instance and are never
//! persisted.
//!
//! # Entity Types
//!
//! - [`Credentials`] - The two input values
//! - [`FieldErrors`] - Inline error text per field
//! - [`FormPhase`] - Submission lifecycle state
//! - [`UserRecord`] - An entry of the remote user collection
//! - [`PlaceholderHint`] - Cosmetic example text for the email input

pub mod credentials;
pub mod field_errors;
pub mod phase;
pub mod user;

pub use credentials::{Credentials, EMAIL_REQUIRED, Field, PASSWORD_REQUIRED};
pub use field_errors::{FETCH_FAILED, FieldErrors, INVALID_CREDENTIALS};
pub use phase::FormPhase;
pub use user::{PlaceholderHint, UserRecord};
