use http::{HeaderMap, Uri};

use crate::request_info::{http_method::HttpMethod, request_info::RequestContent};

/// Wire-level request, owned by a single send.
#[derive(Debug)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Option<RequestContent>,
}
