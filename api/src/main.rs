use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Arc::new(Args::parse());
    let addr = format!("{}:{}", args.server.host, args.server.port);

    let state = state(args).await?;
    let router = router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
