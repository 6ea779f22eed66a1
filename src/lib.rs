//! Executes authenticated HTTP requests described by [`RequestInfo`].
//!
//! A request description is authorized with a bearer token when it carries no
//! `Authorization` header, converted into a [`TransportRequest`], sent through an
//! injected [`Transport`] and the raw [`TransportResponse`] is routed to a
//! [`ResponseHandler`].

pub mod authentication;
pub mod error;
pub mod message_builder;
pub mod request_executor;
pub mod request_info;
pub mod response_handler;
pub mod transport;

pub use authentication::{
    authentication_provider::AuthenticationProvider,
    authorization_injector::AuthorizationInjector, static_token_provider::StaticTokenProvider,
};
pub use error::{BoxError, Error};
pub use request_executor::RequestExecutor;
pub use request_info::{
    http_method::HttpMethod,
    request_headers::RequestHeaders,
    request_info::{QueryParameters, RequestContent, RequestInfo},
};
pub use response_handler::{DiscardResponse, ResponseHandler, ResponseHandling};
pub use transport::{
    reqwest_transport::{ReqwestTransport, TransportConfig},
    transport::Transport,
    transport_error::TransportError,
    transport_request::TransportRequest,
    transport_response::TransportResponse,
};
