//! The login form component.
//!
//! [`LoginForm`] ties the field state, the validator, the authentication
//! service and the post-login transition together. Presentation surfaces
//! (the web session store, the terminal client) own one instance each and
//! drive it with field edits and submits.
//!
//! # Submit Flow
//!
//! 1. Blank checks run synchronously and populate the inline errors
//! 2. If both fields are filled, the user directory is read once
//! 3. The verdict updates the phase and the inline errors
//! 4. On a match, a delayed reset is scheduled; when it fires the form is
//!    cleared and the navigator is sent home
//!
//! Dropping the form, or calling [`LoginForm::teardown`], cancels a pending
//! reset: nothing is cleared and no navigation happens.

pub mod transition;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

use crate::application::services::AuthService;
use crate::domain::entities::{
    Credentials, Field, FieldErrors, FormPhase, PlaceholderHint, UserRecord,
};
use crate::domain::repositories::{Navigator, UserDirectory};
use crate::domain::validator::validate;
use crate::error::LoginError;

pub use transition::TransitionController;

/// Delay between a successful login and the reset/navigation.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// What a call to [`LoginForm::submit`] ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was blank; the directory was not contacted.
    Invalid,
    /// A record matched; the reset is scheduled.
    Authenticated,
    /// The directory was read but no record matched.
    Rejected,
    /// The directory could not be read.
    TransportFailed,
}

/// Point-in-time copy of the form state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    pub placeholder: Option<String>,
}

impl FormSnapshot {
    pub fn submitted(&self) -> bool {
        self.phase.submitted()
    }

    pub fn authenticated(&self) -> bool {
        self.phase.authenticated()
    }

    /// Text for the email input's placeholder attribute.
    pub fn email_placeholder(&self) -> String {
        PlaceholderHint::new(self.placeholder.clone()).email_placeholder()
    }
}

#[derive(Debug, Default)]
struct FormState {
    credentials: Credentials,
    errors: FieldErrors,
    phase: FormPhase,
    placeholder: PlaceholderHint,
}

/// A single login form instance.
pub struct LoginForm<R, N>
where
    R: UserDirectory + 'static,
    N: Navigator + 'static,
{
    state: Arc<Mutex<FormState>>,
    auth: AuthService<R>,
    navigator: Arc<N>,
    transition: TransitionController,
    reset_delay: Duration,
    mounted: AtomicBool,
}

impl<R, N> LoginForm<R, N>
where
    R: UserDirectory + 'static,
    N: Navigator + 'static,
{
    /// Creates an empty form with the default reset delay.
    pub fn new(directory: Arc<R>, navigator: Arc<N>) -> Self {
        Self::with_reset_delay(directory, navigator, DEFAULT_RESET_DELAY)
    }

    /// Creates an empty form that resets `reset_delay` after a login.
    pub fn with_reset_delay(directory: Arc<R>, navigator: Arc<N>, reset_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            auth: AuthService::new(directory),
            navigator,
            transition: TransitionController::new(),
            reset_delay,
            mounted: AtomicBool::new(false),
        }
    }

    /// Fetches the placeholder hint.
    ///
    /// Only the first call reads the directory; later calls are no-ops so the
    /// hint never changes once set.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }

        let hint = self.auth.placeholder_hint().await;
        self.lock().placeholder = hint;
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.set_field(Field::Email, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.set_field(Field::Password, value);
    }

    /// Replaces a field value and clears both inline errors.
    ///
    /// Errors are cleared even when the new value is still blank; they only
    /// come back on the next submit.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        state.credentials.set(field, value.into());
        state.errors.clear();
    }

    /// Validates and, if both fields are filled, authenticates.
    ///
    /// Never fails: every error ends up as inline field text. Overlapping
    /// calls are not guarded against; each applies its verdict when its
    /// lookup completes.
    pub async fn submit(&self) -> SubmitOutcome {
        let result = self.attempt().await;

        let mut state = self.lock();
        match result {
            Ok(_) => {
                // The reset already pending covers this login as well.
                if state.phase != FormPhase::Resetting {
                    state.phase = FormPhase::Succeeded;
                    self.schedule_reset(&mut state);
                }
                SubmitOutcome::Authenticated
            }
            Err(e) => {
                state.errors = e.field_errors();
                match e {
                    LoginError::Validation(_) => SubmitOutcome::Invalid,
                    LoginError::AuthMismatch => {
                        if !state.phase.authenticated() {
                            state.phase = FormPhase::Failed;
                        }
                        SubmitOutcome::Rejected
                    }
                    LoginError::Transport(err) => {
                        tracing::error!(error = %err, "Error while fetching user directory");
                        SubmitOutcome::TransportFailed
                    }
                }
            }
        }
    }

    /// Clears the inline errors, checks for blank fields and looks the
    /// credentials up.
    ///
    /// A blank field returns before the directory is contacted.
    async fn attempt(&self) -> Result<UserRecord, LoginError> {
        let credentials = {
            let mut state = self.lock();
            state.errors.clear();
            validate(&state.credentials).into_result()?;
            state.credentials.clone()
        };

        self.auth
            .authenticate(&credentials.email, &credentials.password)
            .await
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            email: state.credentials.email.clone(),
            password: state.credentials.password.clone(),
            errors: state.errors.clone(),
            phase: state.phase,
            placeholder: state.placeholder.name().map(str::to_string),
        }
    }

    /// Cancels a pending reset without touching the state.
    pub fn teardown(&self) {
        if self.transition.cancel() {
            tracing::debug!("Login transition cancelled");
        }
    }

    /// Returns true while the post-login reset is waiting to fire.
    pub fn is_transition_pending(&self) -> bool {
        self.transition.is_pending()
    }

    fn schedule_reset(&self, state: &mut FormState) {
        let shared = Arc::clone(&self.state);
        let navigator = Arc::clone(&self.navigator);

        self.transition.schedule(self.reset_delay, move || {
            {
                let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
                state.credentials = Credentials::default();
                state.errors.clear();
                state.phase = FormPhase::Idle;
            }
            tracing::debug!("Login transition complete, navigating home");
            navigator.navigate_home();
        });

        state.phase = FormPhase::Resetting;
        tracing::debug!(delay_ms = self.reset_delay.as_millis() as u64, "Login transition scheduled");
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
