//! Collaborator trait definitions for the domain layer.
//!
//! The form talks to the outside world through two seams: the remote user
//! collection it authenticates against, and the router it signals after a
//! successful login. Concrete implementations live in
//! `crate::infrastructure` and `crate::web`.
//!
//! Mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Traits
//!
//! - [`UserDirectory`] - Read access to the user collection
//! - [`Navigator`] - Post-login navigation

pub mod navigator;
pub mod user_repository;

pub use navigator::Navigator;
pub use user_repository::UserDirectory;

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use user_repository::MockUserDirectory;
