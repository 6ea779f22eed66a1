mod cli_arguments;

use std::{sync::Arc, time::Duration};

use clap::Parser;
use request_executor::{
    BoxError, RequestExecutor, ReqwestTransport, ResponseHandler, ResponseHandling,
    StaticTokenProvider, TransportConfig, TransportResponse,
};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

struct TextResponse;

impl ResponseHandler<TransportResponse> for TextResponse {
    type Model = (u16, String);

    fn handle_response(&self, response: TransportResponse) -> Result<Self::Model, BoxError> {
        let body = String::from_utf8(response.body.to_vec())?;
        Ok((response.status, body))
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let transport = ReqwestTransport::with_config(&TransportConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        user_agent: Some(format!("request-executor/{}", env!("CARGO_PKG_VERSION"))),
    })?;

    let executor = RequestExecutor::with_transport(
        Arc::new(StaticTokenProvider::new(args.token.clone())),
        Arc::new(transport),
    );

    info!("Requesting {} {}", args.method, args.url);

    let response = executor
        .send(args.request_info(), ResponseHandling::WithHandler(TextResponse))
        .await?;

    if let Some((status, body)) = response {
        println!("{}", status);
        println!("{}", body);
    }

    Ok(())
}
