use async_trait::async_trait;

use crate::{authentication::authentication_provider::AuthenticationProvider, error::BoxError};

/// Hands out the same token for every uri.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        StaticTokenProvider {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AuthenticationProvider for StaticTokenProvider {
    async fn get_authorization_token(&self, _uri: &str) -> Result<Option<String>, BoxError> {
        Ok(Some(self.token.clone()))
    }
}
