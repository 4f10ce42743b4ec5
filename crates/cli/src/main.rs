mod shell;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shelf_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "Book catalogue service and list controller")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the catalogue HTTP service
    Serve,
    /// Drive the book list interactively against a running service
    Shell {
        /// Service base URL; defaults to `client.base_url` from configuration
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load SHELF settings")?;
    shelf_telemetry::init(&settings.telemetry)?;

    match cli.command {
        Command::Serve => {
            tracing::info!(env = ?settings.environment, "shelf serve starting");
            shelf_app::run(settings).await
        }
        Command::Shell { base_url } => {
            let base_url = base_url.unwrap_or_else(|| settings.client.base_url.clone());
            tracing::info!(%base_url, "shelf shell starting");
            shell::run(&base_url).await
        }
    }
}
