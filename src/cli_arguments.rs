use clap::Parser;
use http::Method;
use request_executor::{RequestContent, RequestInfo};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long)]
    pub url: String,

    #[arg(short, long, default_value = "GET", value_parser = parse_method)]
    pub method: Method,

    #[arg(short, long)]
    pub token: String,

    /// `Name: value`, may be repeated
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// `name=value`, may be repeated
    #[arg(short, long = "query", value_parser = parse_query)]
    pub query: Vec<(String, String)>,

    #[arg(short, long)]
    pub body: Option<String>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl CliArguments {
    pub(crate) fn request_info(&self) -> RequestInfo {
        let mut request_info = RequestInfo::new(self.method.clone(), self.url.clone());

        for (name, value) in &self.query {
            request_info = request_info.with_query_parameter(name, value);
        }
        for (name, value) in &self.headers {
            request_info = request_info.with_header(name, value);
        }
        if let Some(body) = &self.body {
            request_info = request_info.with_content(RequestContent::from_bytes(body.clone()));
        }

        request_info
    }
}

fn parse_method(value: &str) -> Result<Method, String> {
    Method::from_bytes(value.as_bytes()).map_err(|e| e.to_string())
}

fn parse_header(value: &str) -> Result<(String, String), String> {
    let (name, header_value) = value
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got `{}`", value))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing header name in `{}`", value));
    }

    Ok((name.to_string(), header_value.trim().to_string()))
}

fn parse_query(value: &str) -> Result<(String, String), String> {
    let (name, query_value) = value
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{}`", value))?;

    if name.is_empty() {
        return Err(format!("missing parameter name in `{}`", value));
    }

    Ok((name.to_string(), query_value.to_string()))
}
