#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Could not build the HTTP client: {0}")]
    Build(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait TransportErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

impl TransportError {
    pub fn classify<T: TransportErrorChecker + ?Sized>(err: &T) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() || err.is_request() {
            TransportError::Network(err.error_string())
        } else {
            TransportError::InvalidRequest(err.error_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transport::transport_error::{MockTransportErrorChecker, TransportError};

    fn failure(
        timeout: bool,
        connect: bool,
        request: bool,
        message: &str,
    ) -> MockTransportErrorChecker {
        let mut mock = MockTransportErrorChecker::new();
        mock.expect_is_timeout().return_const(timeout);
        mock.expect_is_connect().return_const(connect);
        mock.expect_is_request().return_const(request);
        mock.expect_error_string().return_const(message.to_string());
        mock
    }

    #[test]
    fn a_timeout_wins_over_every_other_flag() {
        let err = TransportError::classify(&failure(true, true, true, "deadline elapsed"));

        assert!(matches!(err, TransportError::Timeout));
        assert_eq!(err.to_string(), "Timeout");
    }

    #[test]
    fn keeps_the_client_message_for_network_failures() {
        let refused = TransportError::classify(&failure(false, true, false, "connection refused"));
        assert!(matches!(&refused, TransportError::Network(m) if m == "connection refused"));
        assert_eq!(refused.to_string(), "Network error: connection refused");

        let reset = TransportError::classify(&failure(false, false, true, "connection reset"));
        assert!(matches!(&reset, TransportError::Network(m) if m == "connection reset"));
    }

    #[test]
    fn treats_unclassified_failures_as_invalid_requests() {
        let err = TransportError::classify(&failure(false, false, false, "builder error"));

        assert!(matches!(&err, TransportError::InvalidRequest(m) if m == "builder error"));
        assert_eq!(err.to_string(), "Invalid request: builder error");
    }

    #[test]
    fn surfaces_unchanged_through_the_executor_error() {
        let err =
            crate::error::Error::from(TransportError::Network("dns lookup failed".to_string()));

        assert_eq!(err.to_string(), "Network error: dns lookup failed");
    }
}
