//! Navigation collaborator signalled after a successful login.

/// Router owned by the presentation surface.
///
/// Called from the transition task once the post-login delay elapses, so
/// implementations must not block.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Moves the user to the home view.
    fn navigate_home(&self);
}
