//! Web page and health handlers.

pub mod health;
pub mod home;
pub mod login;

pub use health::health_handler;
pub use home::home_handler;
pub use login::{login_handler, submit_handler};
