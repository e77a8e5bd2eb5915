// src/main.rs — korpora entry point

use clap::Parser;

use korpora::cli::Cli;
use korpora::infra::config::Config;
use korpora::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no korpora.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };

    korpora::cli::compare::run_compare(&cli, &config).await
}
