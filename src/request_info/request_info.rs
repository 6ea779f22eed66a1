use std::{fmt, io, pin::Pin};

use bytes::Bytes;
use futures_util::{Stream, stream};
use http::Method;

use crate::{error::Error, request_info::request_headers::RequestHeaders};

/// Description of one HTTP request before it is bound to a transport.
#[derive(Debug)]
pub struct RequestInfo {
    pub method: Method,
    pub uri: String,
    pub query_parameters: QueryParameters,
    pub headers: RequestHeaders,
    pub content: Option<RequestContent>,
}

impl RequestInfo {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        RequestInfo {
            method,
            uri: uri.into(),
            query_parameters: QueryParameters::default(),
            headers: RequestHeaders::default(),
            content: None,
        }
    }

    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query_parameters.insert(name, value);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_content(mut self, content: RequestContent) -> Self {
        self.content = Some(content);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.uri.trim().is_empty() {
            return Err(Error::InvalidArgument("uri must not be empty".to_string()));
        }

        if self.headers.iter().any(|(name, _)| name.is_empty()) {
            return Err(Error::InvalidArgument(
                "header names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Query parameters in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters(Vec<(String, String)>);

impl QueryParameters {
    /// Replaces the value in place when `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<const N: usize> From<[(String, String); N]> for QueryParameters {
    fn from(arr: [(String, String); N]) -> Self {
        let mut parameters = QueryParameters::default();
        for (name, value) in arr {
            parameters.insert(name, value);
        }
        parameters
    }
}

pub type ContentStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

/// Request body, read as a stream of chunks when the request is sent.
pub struct RequestContent {
    stream: ContentStream,
}

impl RequestContent {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + Sync + 'static,
    {
        RequestContent {
            stream: Box::pin(stream),
        }
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self::from_stream(stream::once(futures_util::future::ready(Ok(bytes.into()))))
    }

    pub fn into_stream(self) -> ContentStream {
        self.stream
    }
}

impl fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContent").finish_non_exhaustive()
    }
}
