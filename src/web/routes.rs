//! Web route configuration.

use axum::response::Redirect;
use axum::{Router, routing::get};

use crate::state::AppState;
use crate::web::handlers::{health_handler, home_handler, login_handler, submit_handler};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /`       - Redirects to the login page
/// - `GET  /login`  - Login page
/// - `POST /login`  - Submit credentials
/// - `GET  /home`   - Home page reached after a login
/// - `GET  /health` - Health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/login", get(login_handler).post(submit_handler))
        .route("/home", get(home_handler))
        .route("/health", get(health_handler))
}
