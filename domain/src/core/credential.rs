//! API credential value object

/// Secret key for the chat-completion service (Value Object)
///
/// Supplied once per run and passed by reference into every gateway call.
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential {
    secret: String,
}

impl ApiCredential {
    /// Try to create a credential, returning None if blank.
    ///
    /// Surrounding whitespace (e.g. a trailing newline from a terminal
    /// prompt) is stripped.
    pub fn try_new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                secret: trimmed.to_string(),
            })
        }
    }

    /// Expose the secret for building an authorization header
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}

impl std::fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}
