//! Source of the bearer token attached to API requests

use std::sync::RwLock;

/// Supplies the access token obtained from the identity provider
pub trait CredentialProvider: Send + Sync {
    /// Current access token, `None` when signed out
    fn current_token(&self) -> Option<String>;

    /// Forgets the current token, e.g. after the API rejected it
    fn clear_token(&self);
}

/// Credential provider holding a single token in memory
#[derive(Debug, Default)]
pub struct StaticCredentials {
    token: RwLock<Option<String>>,
}

impl StaticCredentials {
    /// Provider holding `token`
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Provider without a token
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }
}

impl CredentialProvider for StaticCredentials {
    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn clear_token(&self) {
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_token() {
        let credentials = StaticCredentials::new("abc");
        assert_eq!(credentials.current_token().as_deref(), Some("abc"));

        credentials.clear_token();
        assert_eq!(credentials.current_token(), None);
        assert_eq!(StaticCredentials::signed_out().current_token(), None);
    }
}
