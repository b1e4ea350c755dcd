mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use login_form::prelude::*;

#[derive(Default)]
struct CountingNavigator {
    calls: AtomicUsize,
}

impl Navigator for CountingNavigator {
    fn navigate_home(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn form_for(
    users_url: String,
    reset_delay: Duration,
) -> (LoginForm<HttpUserDirectory, CountingNavigator>, Arc<CountingNavigator>) {
    let navigator = Arc::new(CountingNavigator::default());
    let form = LoginForm::with_reset_delay(
        Arc::new(HttpUserDirectory::new(users_url)),
        Arc::clone(&navigator),
        reset_delay,
    );
    (form, navigator)
}

#[tokio::test]
async fn test_login_then_reset_and_navigate() {
    let stub = common::start_stub_directory().await;
    let (form, navigator) = form_for(stub.users_url(), Duration::from_millis(100));

    form.mount().await;
    assert_eq!(form.snapshot().email_placeholder(), "e.g. Leanne Graham");

    form.set_email("a@b.com");
    form.set_password("pw");
    assert_eq!(form.submit().await, SubmitOutcome::Authenticated);

    let snapshot = form.snapshot();
    assert!(snapshot.submitted());
    assert!(snapshot.authenticated());
    assert_eq!(navigator.calls.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(400)).await;

    let snapshot = form.snapshot();
    assert_eq!(snapshot.phase, FormPhase::Idle);
    assert_eq!(snapshot.email, "");
    assert_eq!(snapshot.password, "");
    assert_eq!(snapshot.placeholder.as_deref(), Some("Leanne Graham"));
    assert_eq!(navigator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let stub = common::start_stub_directory().await;
    let (form, navigator) = form_for(stub.users_url(), Duration::from_millis(50));

    form.set_email("a@b.com");
    form.set_password("wrong");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);

    let snapshot = form.snapshot();
    assert!(snapshot.submitted());
    assert!(!snapshot.authenticated());
    assert_eq!(snapshot.errors, FieldErrors::both("Invalid email or password"));
    assert!(!form.is_transition_pending());
    assert_eq!(navigator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_is_a_transport_failure() {
    let stub = common::start_stub_directory().await;
    let (form, _navigator) = form_for(stub.url("/broken"), Duration::from_millis(50));

    form.set_email("a@b.com");
    form.set_password("pw");

    assert_eq!(form.submit().await, SubmitOutcome::TransportFailed);

    let snapshot = form.snapshot();
    assert_eq!(
        snapshot.errors,
        FieldErrors::both("Error occurred while fetching data")
    );
    assert!(!snapshot.submitted());
    assert!(!snapshot.authenticated());
}

#[tokio::test]
async fn test_unreachable_directory_keeps_form_usable() {
    let (form, _navigator) = form_for(common::unreachable_url(), Duration::from_millis(50));

    form.mount().await;
    assert_eq!(form.snapshot().placeholder, None);

    form.set_email("a@b.com");
    form.set_password("pw");
    assert_eq!(form.submit().await, SubmitOutcome::TransportFailed);

    form.set_password("pw2");
    assert!(form.snapshot().errors.is_empty());
}

#[tokio::test]
async fn test_teardown_before_delay_skips_navigation() {
    let stub = common::start_stub_directory().await;
    let (form, navigator) = form_for(stub.users_url(), Duration::from_millis(200));

    form.set_email("a@b.com");
    form.set_password("pw");
    form.submit().await;

    drop(form);
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(navigator.calls.load(Ordering::SeqCst), 0);
}
