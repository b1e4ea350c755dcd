//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`http`] - Remote user directory over HTTP (reqwest)

pub mod http;
