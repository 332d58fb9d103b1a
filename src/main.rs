use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dummylog::app::{AppContext, DummylogError};
use dummylog::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for emitted messages
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config.as_deref()).context("dummylog: failed to load config")?;
    ctx.listen_for_signals()?;

    let (name, result) = match cli.command {
        Commands::Run(args) => ("run", commands::run(&ctx, &args).await),
        Commands::Serve => ("serve", commands::serve(&ctx).await),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e @ DummylogError::ShutdownTimeout(_)) => {
            // A half-closed server must not outlive the grace period
            eprintln!("dummylog: {} command failed: {}", name, e);
            std::process::abort();
        }
        Err(e) => Err(e).with_context(|| format!("dummylog: {} command failed", name)),
    }
}
