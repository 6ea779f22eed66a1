//! Conversion of a [`RequestInfo`] into a [`TransportRequest`].
//!
//! Query values are appended verbatim: no percent-encoding happens here, and a
//! body is attached without defaulting a content type.

use http::{HeaderMap, HeaderName, HeaderValue, Uri};

use crate::{
    error::Error,
    request_info::{
        http_method::HttpMethod,
        request_headers::RequestHeaders,
        request_info::{QueryParameters, RequestInfo},
    },
    transport::transport_request::TransportRequest,
};

pub fn build(request_info: RequestInfo) -> Result<TransportRequest, Error> {
    let method = HttpMethod::try_from(&request_info.method)?;
    let uri = parse_uri(&assemble_uri(&request_info.uri, &request_info.query_parameters))?;
    let headers = header_map(&request_info.headers)?;

    Ok(TransportRequest {
        method,
        uri,
        headers,
        body: request_info.content,
    })
}

fn assemble_uri(base: &str, query_parameters: &QueryParameters) -> String {
    if query_parameters.is_empty() {
        return base.to_string();
    }

    let query = query_parameters
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}

fn parse_uri(target: &str) -> Result<Uri, Error> {
    let uri: Uri = target
        .parse()
        .map_err(|e| Error::MalformedRequest(format!("{}: {}", target, e)))?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(Error::MalformedRequest(format!(
            "{}: scheme and host are required",
            target
        )));
    }

    Ok(uri)
}

fn header_map(headers: &RequestHeaders) -> Result<HeaderMap, Error> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::MalformedRequest(format!("invalid header name {:?}", name)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| Error::MalformedRequest(format!("invalid value for header {}", name)))?;

        header_map.append(header_name, header_value);
    }
    Ok(header_map)
}
