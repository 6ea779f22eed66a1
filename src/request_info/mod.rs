pub mod http_method;
pub mod request_headers;
pub mod request_info;
