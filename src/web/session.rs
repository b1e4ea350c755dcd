//! Per-browser form sessions.
//!
//! Each browser gets its own [`LoginForm`], keyed by a random id stored in
//! the `login_session` cookie. The form's navigator records that the
//! post-login transition fired; the next page load then redirects home.
//!
//! Sessions that go unused for longer than the configured TTL are evicted by
//! [`run_session_sweeper`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use rand::RngCore;
use tokio::time::{Instant, MissedTickBehavior};

use crate::application::form::LoginForm;
use crate::domain::repositories::{Navigator, UserDirectory};
use crate::infrastructure::http::HttpUserDirectory;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "login_session";

/// Random bytes per session id before hex encoding.
const SESSION_ID_BYTES: usize = 16;

/// Upper bound on the time between two eviction sweeps.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Navigator that flags a pending redirect for the next request.
#[derive(Debug, Default)]
pub struct SessionNavigator {
    home_requested: AtomicBool,
}

impl SessionNavigator {
    /// Returns true once per navigation, clearing the flag.
    pub fn take_home_request(&self) -> bool {
        self.home_requested.swap(false, Ordering::SeqCst)
    }
}

impl Navigator for SessionNavigator {
    fn navigate_home(&self) {
        self.home_requested.store(true, Ordering::SeqCst);
    }
}

/// A login form bound to one browser.
pub struct Session<R = HttpUserDirectory>
where
    R: UserDirectory + 'static,
{
    pub form: LoginForm<R, SessionNavigator>,
    pub navigator: Arc<SessionNavigator>,
    last_seen: Mutex<Instant>,
}

impl<R> Session<R>
where
    R: UserDirectory + 'static,
{
    /// Marks the session as used now.
    pub fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    /// Time since the session was created or last looked up.
    pub fn idle_for(&self) -> Duration {
        self.last_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
    }
}

/// In-memory registry of live sessions.
///
/// Removing a session tears its form down, which cancels any pending
/// transition.
pub struct SessionStore<R = HttpUserDirectory>
where
    R: UserDirectory + 'static,
{
    sessions: Mutex<HashMap<String, Arc<Session<R>>>>,
}

impl<R> Default for SessionStore<R>
where
    R: UserDirectory + 'static,
{
    fn default() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl<R> SessionStore<R>
where
    R: UserDirectory + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a session by id and refreshes its last-seen time.
    pub fn get(&self, id: &str) -> Option<Arc<Session<R>>> {
        let session = self.lock().get(id).cloned()?;
        session.touch();
        Some(session)
    }

    /// Creates and registers a new session with an empty form.
    ///
    /// The caller is responsible for mounting the form.
    pub fn create(&self, directory: Arc<R>, reset_delay: Duration) -> (String, Arc<Session<R>>) {
        let id = new_session_id();
        let navigator = Arc::new(SessionNavigator::default());
        let session = Arc::new(Session {
            form: LoginForm::with_reset_delay(directory, Arc::clone(&navigator), reset_delay),
            navigator,
            last_seen: Mutex::new(Instant::now()),
        });

        self.lock().insert(id.clone(), Arc::clone(&session));
        tracing::debug!(session = %id, "Session created");

        (id, session)
    }

    /// Tears a session down.
    ///
    /// Returns false if no session had that id.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.lock().remove(id);
        match removed {
            Some(session) => {
                session.form.teardown();
                tracing::debug!(session = %id, "Session removed");
                true
            }
            None => false,
        }
    }

    /// Removes every session idle for longer than `ttl`.
    ///
    /// Returns the number of sessions evicted.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let expired: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, session)| session.idle_for() > ttl)
            .map(|(id, _)| id.clone())
            .collect();

        expired.iter().filter(|id| self.remove(id)).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Session<R>>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Time between sweeps for a given TTL.
pub fn sweep_interval(ttl: Duration) -> Duration {
    ttl.min(MAX_SWEEP_INTERVAL)
}

/// Evicts idle sessions every `period` until the task is aborted.
///
/// `period` must be non-zero.
pub async fn run_session_sweeper<R>(sessions: Arc<SessionStore<R>>, ttl: Duration, period: Duration)
where
    R: UserDirectory + 'static,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let evicted = sessions.evict_idle(ttl);
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
    }
}

/// Extracts the session id from the `Cookie` header.
///
/// Handles multiple cookies in one header by splitting on semicolons and
/// ignoring every cookie other than [`SESSION_COOKIE`].
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds the `Set-Cookie` value for a session id.
pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

fn new_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
