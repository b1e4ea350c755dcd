//! Login page handlers.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::application::form::FormSnapshot;
use crate::domain::entities::FormPhase;
use crate::state::AppState;
use crate::web::session::{Session, session_cookie, session_id_from_headers};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email and masked password inputs with inline errors
/// - Success/failure banner after a submit
/// - An auto-refresh while the post-login transition is pending
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub email_placeholder: String,
    pub email_error: String,
    pub password_error: String,
    pub banner: String,
    pub banner_success: bool,
    /// Seconds until the page reloads; zero disables the refresh.
    pub refresh_secs: u64,
}

impl LoginTemplate {
    fn from_snapshot(snapshot: &FormSnapshot, state: &AppState) -> Self {
        let refresh_secs = if snapshot.phase == FormPhase::Resetting {
            state.reset_delay.as_secs().max(1)
        } else {
            0
        };

        Self {
            email: snapshot.email.clone(),
            email_placeholder: snapshot.email_placeholder(),
            email_error: snapshot.errors.email.clone(),
            password_error: snapshot.errors.password.clone(),
            banner: snapshot.phase.banner().unwrap_or_default().to_string(),
            banner_success: snapshot.authenticated(),
            refresh_secs,
        }
    }
}

/// Form body posted by the login page.
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Session
///
/// Creates a session on the first visit (setting the `login_session`
/// cookie) and fetches the placeholder hint for it. If the session's
/// post-login transition has fired since the last request, redirects to
/// `/home` instead of rendering.
pub async fn login_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session, new_cookie) = resolve_session(&state, &headers).await;

    if session.navigator.take_home_request() {
        return with_cookie(Redirect::to("/home"), new_cookie);
    }

    let page = LoginTemplate::from_snapshot(&session.form.snapshot(), &state);
    with_cookie(page, new_cookie)
}

/// Applies the posted fields and submits the form.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response
///
/// Always re-renders the login page: blank fields, unknown credentials and
/// directory failures all show up as inline errors.
pub async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<LoginInput>,
) -> Response {
    let (session, new_cookie) = resolve_session(&state, &headers).await;

    session.form.set_email(input.email);
    session.form.set_password(input.password);
    let outcome = session.form.submit().await;
    tracing::debug!(?outcome, "Login form submitted");

    let page = LoginTemplate::from_snapshot(&session.form.snapshot(), &state);
    with_cookie(page, new_cookie)
}

/// Finds the caller's session or creates and mounts a new one.
///
/// Returns the `Set-Cookie` value to send when a session was created.
async fn resolve_session(state: &AppState, headers: &HeaderMap) -> (Arc<Session>, Option<String>) {
    if let Some(session) = session_id_from_headers(headers).and_then(|id| state.sessions.get(&id)) {
        return (session, None);
    }

    let (id, session) = state
        .sessions
        .create(Arc::clone(&state.directory), state.reset_delay);
    session.form.mount().await;

    (session, Some(session_cookie(&id)))
}

fn with_cookie(response: impl IntoResponse, cookie: Option<String>) -> Response {
    match cookie {
        Some(cookie) => ([(SET_COOKIE, cookie)], response).into_response(),
        None => response.into_response(),
    }
}
