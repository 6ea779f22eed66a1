use std::sync::Arc;

use http::header::AUTHORIZATION;
use tracing::debug;

use crate::{
    authentication::authentication_provider::AuthenticationProvider, error::Error,
    request_info::request_info::RequestInfo,
};

/// Makes sure a request description carries an `Authorization` header.
#[derive(Clone)]
pub struct AuthorizationInjector {
    provider: Arc<dyn AuthenticationProvider>,
}

impl AuthorizationInjector {
    pub fn new(provider: Arc<dyn AuthenticationProvider>) -> Self {
        AuthorizationInjector { provider }
    }

    /// Returns `request_info` unchanged when it already has an `Authorization`
    /// header (any case), otherwise with `Authorization: Bearer <token>` appended.
    pub async fn ensure_authorized(&self, request_info: RequestInfo) -> Result<RequestInfo, Error> {
        if request_info.headers.contains_key(AUTHORIZATION.as_str()) {
            debug!("authorization header already present");
            return Ok(request_info);
        }

        let token = self
            .provider
            .get_authorization_token(&request_info.uri)
            .await
            .map_err(Error::AuthenticationProvider)?;

        match token {
            Some(token) if !token.is_empty() => {
                debug!("authorization header injected");
                Ok(request_info.with_header("Authorization", format!("Bearer {}", token)))
            }
            _ => Err(Error::Authentication(request_info.uri)),
        }
    }
}
