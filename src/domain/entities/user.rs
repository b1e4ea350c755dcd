//! User record as returned by the remote user directory.

use serde::Deserialize;

/// One entry of the remote user collection.
///
/// Only the fields the form consumes are decoded; everything else in the
/// payload (address, phone, company, ...) is ignored. Missing fields decode
/// as empty strings so that a sparse record never fails the whole lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

impl UserRecord {
    /// Creates a record with the given fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
        }
    }

    /// Returns true if this record accepts the entered pair.
    ///
    /// The entered password is compared with the record's `username`: the
    /// directory exposes no password field. Both comparisons are exact.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.username == password
    }
}

/// Example text shown in the empty email input.
///
/// Sourced once from the first record's `name`; absent when the directory
/// could not be read or returned no records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderHint(Option<String>);

impl PlaceholderHint {
    pub fn new(name: Option<String>) -> Self {
        Self(name.filter(|n| !n.is_empty()))
    }

    /// Returns the fetched name, if any.
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Renders the placeholder text for the email input.
    pub fn email_placeholder(&self) -> String {
        match &self.0 {
            Some(name) => format!("e.g. {name}"),
            None => "Enter your email address".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_compares_password_with_username() {
        let user = UserRecord::new("Leanne Graham", "Sincere@april.biz", "Bret");

        assert!(user.matches("Sincere@april.biz", "Bret"));
        assert!(!user.matches("Sincere@april.biz", "bret"));
        assert!(!user.matches("sincere@april.biz", "Bret"));
        assert!(!user.matches("Sincere@april.biz ", "Bret"));
        assert!(!user.matches("Sincere@april.biz", "Leanne Graham"));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user, UserRecord::new("Leanne Graham", "Sincere@april.biz", "Bret"));
    }

    #[test]
    fn test_decode_missing_fields_default_to_empty() {
        let user: UserRecord = serde_json::from_str(r#"{ "id": 7 }"#).unwrap();

        assert_eq!(user, UserRecord::default());
    }

    #[test]
    fn test_placeholder_text() {
        let hint = PlaceholderHint::new(Some("Leanne Graham".to_string()));
        assert_eq!(hint.email_placeholder(), "e.g. Leanne Graham");
        assert_eq!(hint.name(), Some("Leanne Graham"));

        let none = PlaceholderHint::default();
        assert_eq!(none.email_placeholder(), "Enter your email address");

        let empty = PlaceholderHint::new(Some(String::new()));
        assert_eq!(empty.name(), None);
    }
}
