pub mod reqwest_transport;
pub mod transport;
pub mod transport_error;
pub mod transport_request;
pub mod transport_response;
