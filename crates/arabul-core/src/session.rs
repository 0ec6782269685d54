use std::fmt;

/// Identity of the signed-in user, passed explicitly to user-scoped calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let session = Session::new(7).with_token("secret-jwt");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("user_id: 7"));
        assert!(!rendered.contains("secret-jwt"));
        assert!(rendered.contains("[redacted]"));
    }
}
