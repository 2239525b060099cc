use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use clima_core::{Aggregator, Config, provider::provider_from_config};

use crate::routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima-server", version, about = "ClimaTem weather backend")]
pub struct Cli {
    /// Port to listen on. Overrides `PORT` and the config file.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory served under `/static/`.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// HTML page served at `/`.
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Explicit config file instead of the platform default.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let env_port = std::env::var("PORT").ok();
        let config = self.resolve_config(env_port.as_deref())?;

        if env_port.as_deref().is_none_or(str::is_empty) && self.port.is_none() {
            println!("🚀 Servidor rodando localmente em: http://localhost:{}", config.server.port);
        }

        let provider = provider_from_config(&config.upstream)
            .context("Failed to set up upstream provider")?;
        let aggregator = Arc::new(Aggregator::new(Arc::from(provider)));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let routes = routes::router(aggregator, config.server);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, wait_for_shutdown(tokio::signal::ctrl_c()))
            .with_context(|| format!("Failed to bind {addr}"))?;

        tracing::info!("Listening on {}", bound);
        server.await;

        Ok(())
    }

    /// Config file first, then `PORT`, then CLI flags.
    fn resolve_config(&self, env_port: Option<&str>) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        config.apply_port_override(env_port)?;

        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = dir.clone();
        }
        if let Some(index) = &self.index {
            config.server.index_path = index.clone();
        }

        Ok(config)
    }
}

/// Resolves once `signal` fires. A handler that can't be installed also
/// ends the wait, so it gets logged first.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal, stopping: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{contents}").expect("write config");
        file
    }

    #[test]
    fn env_port_overrides_file() {
        let file = config_file("[server]\nport = 9000\n");
        let cli = Cli::parse_from(["clima-server", "--config", file.path().to_str().expect("utf8 path")]);

        let config = cli.resolve_config(Some("7000")).expect("config resolves");
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn flags_override_env_and_file() {
        let file = config_file("[server]\nport = 9000\nstatic_dir = \"assets\"\n");
        let cli = Cli::parse_from([
            "clima-server",
            "--config",
            file.path().to_str().expect("utf8 path"),
            "--port",
            "5000",
            "--index",
            "web/index.html",
        ]);

        let config = cli.resolve_config(Some("7000")).expect("config resolves");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.static_dir, PathBuf::from("assets"));
        assert_eq!(config.server.index_path, PathBuf::from("web/index.html"));
    }

    #[tokio::test]
    async fn shutdown_wait_ends_on_signal_error() {
        let failing = async { Err(std::io::Error::other("no signal handler")) };
        tokio::time::timeout(std::time::Duration::from_secs(1), wait_for_shutdown(failing))
            .await
            .expect("wait should end when the handler fails");

        tokio::time::timeout(std::time::Duration::from_secs(1), wait_for_shutdown(async { Ok(()) }))
            .await
            .expect("wait should end on the signal");
    }

    #[test]
    fn invalid_env_port_is_an_error() {
        let file = config_file("");
        let cli = Cli::parse_from(["clima-server", "--config", file.path().to_str().expect("utf8 path")]);

        assert!(cli.resolve_config(Some("nope")).is_err());
    }
}
