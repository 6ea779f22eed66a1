use async_trait::async_trait;

use crate::transport::{
    transport_error::TransportError, transport_request::TransportRequest,
    transport_response::TransportResponse,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
