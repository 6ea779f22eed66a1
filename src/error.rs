use crate::transport::transport_error::TransportError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not get an authorization token for {0}")]
    Authentication(String),

    #[error("Authentication provider failed: {0}")]
    AuthenticationProvider(#[source] BoxError),

    #[error("HTTP method {0} is not supported")]
    UnsupportedMethod(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Handler(BoxError),

    #[error("Request was cancelled")]
    Cancelled,
}
