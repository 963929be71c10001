mod http;
mod knowledge;
mod language;
mod operations;
mod page;
mod session;
mod speech;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use http::{server::run_http_server, server_environment::ServerEnvironment};
use log::info;
use utils::log::bootstrap_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = dotenv().ok();
    bootstrap_logging();
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}.", path.display());
    }
    run_http_server(Arc::new(ServerEnvironment::current().await?)).await
}
