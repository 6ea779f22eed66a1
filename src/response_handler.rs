use crate::error::BoxError;

/// Turns a raw response of type `R` into a typed model.
pub trait ResponseHandler<R>: Send + Sync {
    type Model;

    fn handle_response(&self, response: R) -> Result<Self::Model, BoxError>;
}

/// How the raw response of a send is consumed, decided once per call.
pub enum ResponseHandling<H> {
    /// The response is dropped and the send yields no model.
    NoHandler,
    WithHandler(H),
}

impl ResponseHandling<DiscardResponse> {
    pub fn discard() -> Self {
        ResponseHandling::NoHandler
    }
}

impl<H> From<H> for ResponseHandling<H> {
    fn from(handler: H) -> Self {
        ResponseHandling::WithHandler(handler)
    }
}

/// Accepts any response and produces nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardResponse;

impl<R> ResponseHandler<R> for DiscardResponse {
    type Model = ();

    fn handle_response(&self, _response: R) -> Result<Self::Model, BoxError> {
        Ok(())
    }
}
