use tracing::{debug, instrument};

use super::{is_blank, missing};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Login/signup form. Nothing is authenticated; the only check is presence.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialsDraft {
    pub mode: AuthMode,
    /// Only asked for on signup.
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CredentialsDraft {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }

    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn submit(&self) -> Result<()> {
        let needs_name = self.mode == AuthMode::Signup;
        let missing = missing([
            ("name", !needs_name || !is_blank(&self.name)),
            ("email", !is_blank(&self.email)),
            ("password", !self.password.is_empty()),
        ]);
        if !missing.is_empty() {
            debug!(?missing, "Credentials form has blank required fields");
            return Err(ModelError::MissingFields(missing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_ignores_name() {
        let mut draft = CredentialsDraft::new(AuthMode::Login);
        draft.email = "john.doe@example.com".into();
        draft.password = "secret".into();
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn test_signup_requires_name() {
        let mut draft = CredentialsDraft::new(AuthMode::Signup);
        draft.email = "a@b.c".into();
        assert_eq!(
            draft.submit().unwrap_err(),
            ModelError::MissingFields(vec!["name", "password"])
        );
    }
}
