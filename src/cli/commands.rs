use std::fs::File;
use std::time::Duration;

use crate::app::{AppContext, DummylogError, Result};
use crate::cli::RunArgs;
use crate::config::{format_interval, parse_interval, Config};
use crate::domain::Format;
use crate::emitter::{self, Emitter};
use crate::sentence::HipsterSentence;
use crate::server::{HttpService, ServerConfig};

/// Build the emitter from flags and config, then emit until cancelled.
pub async fn run(ctx: &AppContext, args: &RunArgs) -> Result<()> {
    let mut emitter = build_emitter(&ctx.config, args)?;
    emitter::run(&mut emitter, &ctx.shutdown).await
}

/// Serve the echo endpoint until cancelled.
pub async fn serve(ctx: &AppContext) -> Result<()> {
    let config = server_config(&ctx.config)?;
    HttpService::new(config).serve(ctx.shutdown.clone()).await
}

pub fn build_emitter(config: &Config, args: &RunArgs) -> Result<Emitter> {
    let format = match args.format.as_deref() {
        Some(name) => name.parse::<Format>()?,
        None => config.run.format,
    };

    let interval = match args.interval.as_deref() {
        Some(s) => parse_interval(s).map_err(DummylogError::InvalidInterval)?,
        None => config.run.interval(),
    };
    if interval.is_zero() {
        return Err(DummylogError::InvalidInterval(
            "interval must be greater than zero".into(),
        ));
    }

    let words = args.words.unwrap_or(config.run.words);
    let source = match args.seed.or(config.run.seed) {
        Some(seed) => HipsterSentence::with_seed(words, seed),
        None => HipsterSentence::new(words),
    };

    let mut builder = Emitter::builder()
        .format(format)
        .interval(interval)
        .source(source);

    if let Some(path) = &args.file {
        let file = File::create(path).map_err(|source| DummylogError::CreateFile {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Writing logs to {}", path.display());
        builder = builder.writer(file);
    }

    tracing::debug!(
        "Emitter configured: format={}, interval={}, words={}",
        format,
        format_interval(interval),
        words
    );

    Ok(builder.build())
}

pub fn server_config(config: &Config) -> Result<ServerConfig> {
    let shutdown_grace: Duration = config.serve.shutdown_grace();
    if shutdown_grace.is_zero() {
        return Err(DummylogError::Config(
            "shutdown grace period must be greater than zero".into(),
        ));
    }

    Ok(ServerConfig {
        bind_address: config.serve.bind_address.clone(),
        shutdown_grace,
    })
}
