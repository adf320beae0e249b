//! Todolist CLI - interactive console for the to-do list.

mod console;
mod render;

use anyhow::Result;
use clap::Parser;
use todolist_service::{ServiceConfig, TodoListService};
use todolist_storage::InMemoryTodoListRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console::Console;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Interactive to-do list with progress tracking", long_about = None)]
struct Cli {
    /// Valid category (repeat to replace the default set)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    // stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ServiceConfig::with_categories(cli.categories)?;
    let service = TodoListService::new(InMemoryTodoListRepository::new(), config);
    info!("Application starting");

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.run(&service).await?;
    Ok(())
}
