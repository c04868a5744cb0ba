use crate::slug::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Contact-form submission. Only email and message are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ValidationError(
                "Email and message are required".to_string(),
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError("Invalid email format".to_string()));
        }
        Ok(())
    }

    /// Sender display name, "Not provided" when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "Not provided",
        }
    }

    #[must_use]
    pub fn display_company(&self) -> &str {
        match self.company.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "Not provided",
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    email_regex().is_match(input)
}
