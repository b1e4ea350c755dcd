//! Submission phase of the login form.

use serde::Serialize;

/// Where the form is in its submit/transition lifecycle.
///
/// Replaces a `(submitted, authenticated)` flag pair: an authenticated but
/// unsubmitted form cannot be represented.
///
/// ```text
/// Idle | Failed --submit--> Succeeded --schedule--> Resetting --delay--> Idle
///               \--submit--> Failed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    /// Nothing submitted yet, or the form was reset after a login.
    #[default]
    Idle,
    /// The last completed lookup found no matching user.
    Failed,
    /// A matching user was found and the transition is not scheduled yet.
    Succeeded,
    /// The delayed reset and navigation is pending.
    Resetting,
}

impl FormPhase {
    /// Returns true once a lookup has completed with a verdict.
    pub fn submitted(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if the last verdict was a match.
    pub fn authenticated(self) -> bool {
        matches!(self, Self::Succeeded | Self::Resetting)
    }

    /// Banner text shown below the submit button, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Failed => Some("Authentication failed"),
            Self::Succeeded | Self::Resetting => Some("Successfully submitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_per_phase() {
        assert!(!FormPhase::Idle.submitted());
        assert!(!FormPhase::Idle.authenticated());

        assert!(FormPhase::Failed.submitted());
        assert!(!FormPhase::Failed.authenticated());

        assert!(FormPhase::Succeeded.submitted());
        assert!(FormPhase::Succeeded.authenticated());

        assert!(FormPhase::Resetting.submitted());
        assert!(FormPhase::Resetting.authenticated());
    }

    #[test]
    fn test_authenticated_implies_submitted() {
        for phase in [
            FormPhase::Idle,
            FormPhase::Failed,
            FormPhase::Succeeded,
            FormPhase::Resetting,
        ] {
            assert!(!phase.authenticated() || phase.submitted());
        }
    }

    #[test]
    fn test_banner() {
        assert_eq!(FormPhase::Idle.banner(), None);
        assert_eq!(FormPhase::Failed.banner(), Some("Authentication failed"));
        assert_eq!(FormPhase::Resetting.banner(), Some("Successfully submitted"));
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&FormPhase::Resetting).unwrap();
        assert_eq!(json, "\"resetting\"");
    }
}
