//! Todolist HTTP server.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use todolist_server::config::DEFAULT_BIND;
use todolist_server::ServerConfig;
use todolist_service::ServiceConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todolist-server")]
#[command(about = "HTTP API for the to-do list", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Valid category (repeat to replace the default set)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ServerConfig {
        bind_addr: cli.bind,
        service: ServiceConfig::with_categories(cli.categories)?,
    };
    info!(
        "Starting todolist server v{} with categories: {}",
        env!("CARGO_PKG_VERSION"),
        config.service.categories.labels().join(", ")
    );

    todolist_server::run(config).await
}
