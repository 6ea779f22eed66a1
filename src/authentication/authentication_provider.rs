use async_trait::async_trait;

use crate::error::BoxError;

/// Supplies bearer tokens for outgoing requests.
///
/// `Ok(None)` means no token is available for `uri`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    async fn get_authorization_token(&self, uri: &str) -> Result<Option<String>, BoxError>;
}
