//! # Login Form
//!
//! A login form that authenticates against a remote user list and, after a
//! successful login, waits a fixed delay, clears itself and navigates home.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form entities, blank checks and collaborator traits
//! - **Application Layer** ([`application`]) - Authentication service and the form component
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP user directory
//! - **Web Layer** ([`web`]) - Server-rendered login page with per-browser sessions
//!
//! The terminal client in `src/bin/login_cli.rs` drives the same
//! [`application::form::LoginForm`] from interactive prompts.
//!
//! ## Authentication
//!
//! The user directory exposes no passwords. A login succeeds when some record
//! has an `email` equal to the entered email and a `username` equal to the
//! entered password.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at another user collection
//! export USERS_URL="https://jsonplaceholder.typicode.com/users"
//!
//! # Start the web server
//! cargo run
//!
//! # Or log in from the terminal
//! cargo run --bin login-cli
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{DirectoryError, LoginError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::form::{FormSnapshot, LoginForm, SubmitOutcome};
    pub use crate::application::services::AuthService;
    pub use crate::domain::entities::{Credentials, Field, FieldErrors, FormPhase, UserRecord};
    pub use crate::domain::repositories::{Navigator, UserDirectory};
    pub use crate::error::{DirectoryError, LoginError};
    pub use crate::infrastructure::http::HttpUserDirectory;
    pub use crate::state::AppState;
}
