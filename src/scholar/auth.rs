//! Password login credentials for Scholar Inbox.

use super::error::ScholarError;
use serde::Serialize;
use std::fmt;

/// The body of a `/password_login` request.
#[derive(Clone, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Both values are required and must be non-empty.
    pub fn new(email: Option<&str>, password: Option<&str>) -> Result<Self, ScholarError> {
        let email = email
            .filter(|x| !x.is_empty())
            .ok_or(ScholarError::Configuration("SCHOLAR_INBOX_EMAIL"))?;
        let password = password
            .filter(|x| !x.is_empty())
            .ok_or(ScholarError::Configuration("SCHOLAR_INBOX_PASSWORD"))?;

        Ok(Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// Keeps the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
