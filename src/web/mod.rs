//! Web layer for the browser-based login form.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page and health handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration
//! - [`session`] - Per-browser form sessions

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
