//! Symbol picker command line entry point.

use std::process::ExitCode;

use clap::Parser;
use symbol_picker::cli::{self, Cli};
use symbol_picker::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for symbol output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "symbol_picker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    cli::run(cli, &config).await
}
