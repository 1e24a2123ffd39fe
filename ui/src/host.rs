//! Host-supplied context
//!
//! Everything the widget knows about its host arrives through
//! [`HostContext`], built once at construction and passed explicitly.

use std::fmt;
use std::rc::Rc;

use newsalert_shared::EnvironmentDescriptor;

/// Supplies the authorization header for list requests
pub trait CredentialProvider {
    /// Value for the `Authorization` header, if any
    fn authorization(&self) -> Option<String>;
}

/// Rely on the browser session (cookies) only
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn authorization(&self) -> Option<String> {
        None
    }
}

/// Static bearer token handed over by the host
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

impl CredentialProvider for BearerToken {
    fn authorization(&self) -> Option<String> {
        Some(format!("Bearer {}", self.0))
    }
}

/// Context the host passes to the widget
#[derive(Clone)]
pub struct HostContext {
    /// Absolute URL of the site hosting the list
    pub base_url: String,

    pub credentials: Rc<dyn CredentialProvider>,

    pub environment: EnvironmentDescriptor,
}

impl HostContext {
    pub fn new(base_url: &str, environment: EnvironmentDescriptor) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Rc::new(NoCredentials),
            environment,
        }
    }

    pub fn with_credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Rc::new(credentials);
        self
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let context = HostContext::new(
            "https://contoso.example/sites/news//",
            EnvironmentDescriptor::default(),
        );
        assert_eq!(context.base_url, "https://contoso.example/sites/news");
        assert_eq!(context.credentials.authorization(), None);
    }

    #[test]
    fn test_bearer_token() {
        let context = HostContext::new("https://contoso.example", EnvironmentDescriptor::default())
            .with_credentials(BearerToken::new("abc"));
        assert_eq!(context.credentials.authorization().as_deref(), Some("Bearer abc"));
        assert!(!format!("{context:?}").contains("abc"));
    }
}
