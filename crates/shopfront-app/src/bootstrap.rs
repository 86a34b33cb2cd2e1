use std::future::Future;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use shopfront_api::{ApiServer, ServerOptions, UpstreamCatalog};
use shopfront_config::ProxyConfig;
use shopfront_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, Metrics};
use tracing::{info, warn};

/// Dependencies required to bootstrap the catalog proxy.
pub(crate) struct BootstrapDependencies {
    config: ProxyConfig,
    catalog: UpstreamCatalog,
    telemetry: Metrics,
}

impl BootstrapDependencies {
    /// Construct production dependencies from a loaded configuration.
    pub(crate) fn from_config(config: ProxyConfig) -> AppResult<Self> {
        let catalog = UpstreamCatalog::new(config.upstream_url.clone(), config.upstream_timeout)
            .map_err(|err| AppError::http_client("upstream_catalog.new", err))?;
        let telemetry =
            Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
        Ok(Self {
            config,
            catalog,
            telemetry,
        })
    }
}

/// Entry point for the catalog proxy boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// or the API server fails to bind or serve.
pub async fn run_app() -> AppResult<()> {
    let config =
        ProxyConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;

    let logging = LoggingConfig {
        format: LogFormat::from_name(config.log_format.as_deref()),
        ..LoggingConfig::default()
    };
    shopfront_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("shopfront");

    let dependencies = BootstrapDependencies::from_config(config)?;
    run_app_with(dependencies, shutdown_signal()).await
}

/// Boot sequence that relies entirely on injected dependencies to simplify testing.
pub(crate) async fn run_app_with<F>(dependencies: BootstrapDependencies, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let BootstrapDependencies {
        config,
        catalog,
        telemetry,
    } = dependencies;

    info!(
        upstream = %config.upstream_url,
        metrics = config.metrics_enabled,
        "catalog proxy bootstrap starting"
    );

    let api = ApiServer::new(
        Arc::new(catalog),
        telemetry,
        ServerOptions {
            metrics_enabled: config.metrics_enabled,
        },
    );

    let addr = config.listen_addr();
    info!(addr = %addr, "Launching API listener");
    api.serve(addr, shutdown)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;

    info!("catalog proxy shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::net::{IpAddr, Ipv4Addr};

    fn config_for(url: String, http_port: u16) -> ProxyConfig {
        ProxyConfig {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port,
            upstream_url: url,
            upstream_timeout: None,
            metrics_enabled: false,
            log_format: None,
        }
    }

    #[tokio::test]
    async fn run_app_with_returns_when_shutdown_resolves() -> Result<(), Box<dyn Error>> {
        let upstream = shopfront_test_support::FakeUpstream::json(
            &shopfront_test_support::sample_upstream_payload(),
        )
        .await?;
        let dependencies = BootstrapDependencies::from_config(config_for(upstream.url(), 0))?;

        run_app_with(dependencies, async {}).await?;
        Ok(())
    }

    #[tokio::test]
    async fn bind_failure_surfaces_as_api_server_error() -> Result<(), Box<dyn Error>> {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0")?;
        let port = occupied.local_addr()?.port();
        let dependencies = BootstrapDependencies::from_config(config_for(
            "http://127.0.0.1:9/products".to_string(),
            port,
        ))?;

        let result = run_app_with(dependencies, async {}).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServer {
                operation: "api_server.serve",
                ..
            })
        ));
        drop(occupied);
        Ok(())
    }
}
