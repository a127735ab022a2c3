//! Identity the child process runs under
//!
//! The configuration layer passes this value through to the execution engine
//! without interpreting it. The default value means "run as the current user".

/// Opaque identity for a prospective child process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub domain: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Whether the user profile should be loaded before the process starts.
    pub load_user_profile: bool,
}

impl Credentials {
    /// Whether this is the default-identity sentinel.
    pub fn is_default(&self) -> bool {
        *self == Credentials::default()
    }
}

/// Structured editor for assembling a [`Credentials`] value.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    credentials: Credentials,
}

impl CredentialsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.credentials.domain = Some(domain.into());
        self
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.credentials.username = Some(username.into());
        self
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.credentials.password = Some(password.into());
        self
    }

    pub fn set_load_user_profile(&mut self, load: bool) -> &mut Self {
        self.credentials.load_user_profile = load;
        self
    }

    pub fn build(&self) -> Credentials {
        self.credentials.clone()
    }
}
