use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::{
    authentication::{
        authentication_provider::AuthenticationProvider,
        authorization_injector::AuthorizationInjector,
    },
    error::Error,
    message_builder,
    request_info::request_info::RequestInfo,
    response_handler::{ResponseHandler, ResponseHandling},
    transport::{
        reqwest_transport::ReqwestTransport, transport::Transport,
        transport_response::TransportResponse,
    },
};

/// Sends [`RequestInfo`]s: authorize, build, transport, dispatch.
///
/// The provider and the transport are shared by every call; nothing else is
/// kept between calls.
#[derive(Clone)]
pub struct RequestExecutor {
    injector: AuthorizationInjector,
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    pub fn new(provider: Arc<dyn AuthenticationProvider>) -> Self {
        Self::with_transport(provider, Arc::new(ReqwestTransport::default()))
    }

    pub fn with_transport(
        provider: Arc<dyn AuthenticationProvider>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        RequestExecutor {
            injector: AuthorizationInjector::new(provider),
            transport,
        }
    }

    /// Returns `Ok(None)` for [`ResponseHandling::NoHandler`].
    pub async fn send<H>(
        &self,
        request_info: RequestInfo,
        handling: ResponseHandling<H>,
    ) -> Result<Option<H::Model>, Error>
    where
        H: ResponseHandler<TransportResponse>,
    {
        self.send_with_cancellation(request_info, handling, &CancellationToken::new())
            .await
    }

    /// Like [`send`](Self::send), failing with [`Error::Cancelled`] once
    /// `cancellation` fires during token acquisition or the transport call.
    pub async fn send_with_cancellation<H>(
        &self,
        request_info: RequestInfo,
        handling: ResponseHandling<H>,
        cancellation: &CancellationToken,
    ) -> Result<Option<H::Model>, Error>
    where
        H: ResponseHandler<TransportResponse>,
    {
        let span = info_span!(
            "send",
            request_id = %Uuid::new_v4(),
            method = %request_info.method,
            uri = %request_info.uri
        );

        self.execute(request_info, handling, cancellation)
            .instrument(span)
            .await
    }

    async fn execute<H>(
        &self,
        request_info: RequestInfo,
        handling: ResponseHandling<H>,
        cancellation: &CancellationToken,
    ) -> Result<Option<H::Model>, Error>
    where
        H: ResponseHandler<TransportResponse>,
    {
        request_info.validate()?;

        let request_info = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!("cancelled while authorizing");
                return Err(Error::Cancelled);
            }
            authorized = self.injector.ensure_authorized(request_info) => authorized?,
        };

        let request = message_builder::build(request_info)?;

        debug!("calling transport");
        let response = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!("cancelled while waiting for the transport");
                return Err(Error::Cancelled);
            }
            response = self.transport.send(request) => response?,
        };

        match handling {
            ResponseHandling::NoHandler => {
                drop(response);
                debug!("no response handler, response discarded");
                Ok(None)
            }
            ResponseHandling::WithHandler(handler) => handler
                .handle_response(response)
                .map(Some)
                .map_err(Error::Handler),
        }
    }
}
