//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page reached after a successful login.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /home`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
