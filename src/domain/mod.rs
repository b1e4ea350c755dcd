//! Domain layer containing the form's entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Form data structures
//! - [`repositories`] - Collaborator trait definitions
//! - [`validator`] - Submit-time blank checks
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Collaborator traits define contracts implemented by outer layers
//! - Orchestration lives in [`crate::application`]

pub mod entities;
pub mod repositories;
pub mod validator;
