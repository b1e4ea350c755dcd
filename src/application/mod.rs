//! Application layer: services and the form component.
//!
//! - [`services::auth_service::AuthService`] - Credential lookup against the user directory
//! - [`form::LoginForm`] - Field state, submit flow and post-login transition
//! - [`form::TransitionController`] - Owned, cancellable delayed action

pub mod form;
pub mod services;
