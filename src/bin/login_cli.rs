//! Terminal client for the login form.
//!
//! Drives the same form component as the web server from interactive
//! prompts: the email prompt shows the placeholder hint, the password is
//! read masked, inline errors are printed under the prompts, and after a
//! successful login the client waits for the reset before showing the home
//! view.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin login-cli
//!
//! # Against another user collection, with a shorter transition
//! cargo run --bin login-cli -- --users-url http://localhost:9000/users --reset-delay-ms 500
//! ```
//!
//! # Environment Variables
//!
//! - `USERS_URL`, `RESET_DELAY_MS`, `LOG_FORMAT`: same as the web server;
//!   command-line flags take precedence

use login_form::application::form::{FormSnapshot, LoginForm, SubmitOutcome};
use login_form::config::Config;
use login_form::domain::repositories::Navigator;
use login_form::infrastructure::http::HttpUserDirectory;
use login_form::logging;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;
use tokio::sync::Notify;

/// Log in from the terminal.
#[derive(Parser)]
#[command(name = "login-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// User collection endpoint (overrides USERS_URL)
    #[arg(long)]
    users_url: Option<String>,

    /// Delay between a login and the reset, in milliseconds (overrides RESET_DELAY_MS)
    #[arg(long)]
    reset_delay_ms: Option<u64>,
}

/// Navigator that wakes the prompt loop once the transition fires.
#[derive(Default)]
struct TerminalNavigator {
    arrived: Notify,
}

impl TerminalNavigator {
    async fn wait_home(&self) {
        self.arrived.notified().await;
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_home(&self) {
        self.arrived.notify_one();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(users_url) = cli.users_url {
        config.users_url = users_url;
    }
    if let Some(reset_delay_ms) = cli.reset_delay_ms {
        config.reset_delay_ms = reset_delay_ms;
    }
    config.validate()?;

    // Quiet by default so log lines do not interleave with the prompts.
    logging::init("warn", &config.log_format);

    let navigator = Arc::new(TerminalNavigator::default());
    let directory = Arc::new(HttpUserDirectory::new(config.users_url.clone()));
    let form = LoginForm::with_reset_delay(directory, Arc::clone(&navigator), config.reset_delay());

    form.mount().await;

    println!("{}", "🔐 Login".bright_blue().bold());
    println!();

    loop {
        let snapshot = form.snapshot();

        let email: String = Input::new()
            .with_prompt(format!(
                "Email Address {}",
                format!("({})", snapshot.email_placeholder()).bright_black()
            ))
            .with_initial_text(snapshot.email.clone())
            .allow_empty(true)
            .interact_text()?;
        form.set_email(email);

        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;
        form.set_password(password);

        let outcome = form.submit().await;
        print_result(&form.snapshot());

        if outcome == SubmitOutcome::Authenticated {
            break;
        }

        let retry = Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact()?;

        if !retry {
            form.teardown();
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
        println!();
    }

    println!(
        "{}",
        format!("Redirecting in {}ms...", config.reset_delay_ms).bright_black()
    );
    navigator.wait_home().await;

    println!();
    println!("{}", "🏠 Home".bright_green().bold());
    println!("  You are logged in.");

    Ok(())
}

/// Prints inline errors and the banner for the current state.
fn print_result(snapshot: &FormSnapshot) {
    if !snapshot.errors.email.is_empty() {
        println!("  {} {}", "email:".bright_white(), snapshot.errors.email.red());
    }
    if !snapshot.errors.password.is_empty() {
        println!(
            "  {} {}",
            "password:".bright_white(),
            snapshot.errors.password.red()
        );
    }

    if let Some(banner) = snapshot.phase.banner() {
        if snapshot.authenticated() {
            println!("{}", format!("✅ {banner}").green().bold());
        } else {
            println!("{}", format!("⚠️  {banner}").yellow());
        }
    }
}
