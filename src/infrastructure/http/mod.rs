//! HTTP-backed collaborators.

mod http_user_directory;

pub use http_user_directory::HttpUserDirectory;
