use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::app::error::{DummylogError, Result};
use crate::config::Config;

/// Shared state of one invocation: loaded configuration and the process-wide
/// shutdown token handed to every long-running component.
pub struct AppContext {
    pub config: Config,
    pub shutdown: CancellationToken,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self::new(Config::load(config_path)?))
    }

    /// Cancel the shutdown token on SIGINT or SIGTERM (Ctrl-C on Windows).
    ///
    /// Handlers are installed before this returns, so a signal arriving right
    /// after startup is not lost.
    pub fn listen_for_signals(&self) -> Result<()> {
        let shutdown = self.shutdown.clone();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).map_err(DummylogError::Signal)?;
            let mut sigint = signal(SignalKind::interrupt()).map_err(DummylogError::Signal)?;

            tokio::spawn(async move {
                tokio::select! {
                    _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
                    _ = sigint.recv() => tracing::info!("Received SIGINT"),
                }
                shutdown.cancel();
            });
        }

        #[cfg(windows)]
        {
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl-C: {}", e);
                    return;
                }
                tracing::info!("Received Ctrl-C");
                shutdown.cancel();
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_starts_uncancelled() {
        let ctx = AppContext::new(Config::default());
        ctx.listen_for_signals().unwrap();
        assert!(!ctx.shutdown.is_cancelled());
    }

    #[test]
    fn test_load_propagates_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppContext::load(Some(&dir.path().join("missing.toml")))
            .err()
            .unwrap();
        assert!(matches!(err, DummylogError::ConfigFile(_)));
    }
}
