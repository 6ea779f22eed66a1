use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::transport::{
    transport::Transport,
    transport_error::{TransportError, TransportErrorChecker},
    transport_request::TransportRequest,
    transport_response::TransportResponse,
};

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

/// Standard [`Transport`] backed by a `reqwest` client.
///
/// `timeout`, when set, bounds every request on top of whatever the client
/// itself enforces.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::default(),
            timeout: Some(TransportConfig::default().timeout),
        }
    }
}

impl ReqwestTransport {
    /// Uses `client` as configured, adding no timeout of its own.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    pub fn with_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            timeout: Some(config.timeout),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        info!("Sending {} {}", request.method, request.uri);

        let mut request_builder = self
            .client
            .request(request.method.into(), request.uri.to_string())
            .headers(request.headers);

        if let Some(timeout) = self.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        if let Some(content) = request.body {
            request_builder =
                request_builder.body(reqwest::Body::wrap_stream(content.into_stream()));
        }

        let reqwest_response = request_builder
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = reqwest_response.status().as_u16();
        let headers = reqwest_response.headers().clone();

        let body = reqwest_response
            .bytes()
            .await
            .map_err(TransportError::from)?;

        debug!(status, body_len = body.len(), "response received");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

impl TransportErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::classify(&err)
    }
}
