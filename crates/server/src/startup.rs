use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::ship::{SeaOrmShipRepository, ShipRepository};
use service::storage::InMemoryShipRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Where the running configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The file at this path does not exist; settings come from environment
    /// variables.
    Environment(String),
}

/// Load `config.toml` (or `CONFIG_PATH`). Only a missing file falls back to
/// environment variables; an unreadable or invalid file is an error.
pub fn load_config() -> anyhow::Result<(AppConfig, ConfigSource)> {
    let path = configs::config_path();
    match read_config_file(&path)? {
        Some(cfg) => Ok((cfg, ConfigSource::File(path))),
        None => Ok((AppConfig::from_env()?, ConfigSource::Environment(path))),
    }
}

/// `Ok(None)` when `path` does not exist.
pub fn read_config_file(path: &str) -> anyhow::Result<Option<AppConfig>> {
    let mut cfg = match configs::load_from_file(path) {
        Ok(cfg) => cfg,
        Err(e) if is_missing_file(&e) => return Ok(None),
        Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
    };
    cfg.normalize_and_validate()
        .with_context(|| format!("invalid config file {path}"))?;
    Ok(Some(cfg))
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the configured storage backend, migrating the database when asked to.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo: Arc<dyn ShipRepository> = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "ship storage ready");
            Arc::new(InMemoryShipRepository::new())
        }
        StorageBackend::Database => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg).await?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            info!(backend = "database", "ship storage ready");
            Arc::new(SeaOrmShipRepository::new(db))
        }
    };
    Ok(ServerState::new(repo))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "space catalog listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }

    fn write_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("space-catalog-{}-{}.toml", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let path = std::env::temp_dir().join("space-catalog-no-such-config.toml");
        assert!(read_config_file(&path.to_string_lossy()).unwrap().is_none());
    }

    #[test]
    fn invalid_config_file_is_reported() {
        let path = write_config("bad-port", "[server]\nhost = \"0.0.0.0\"\nport = 0\n[storage]\nbackend = \"memory\"\n");
        let err = read_config_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("server.port"), "{err:#}");
        std::fs::remove_file(&path).ok();

        let path = write_config("not-toml", "[server\nport = ");
        assert!(read_config_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn valid_config_file_is_used_as_written() {
        let path = write_config("memory", "[server]\nhost = \"0.0.0.0\"\nport = 9191\n[storage]\nbackend = \"memory\"\n");
        let cfg = read_config_file(&path).unwrap().expect("config present");
        assert_eq!((cfg.server.host.as_str(), cfg.server.port), ("0.0.0.0", 9191));
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn memory_backend_needs_no_database() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await?;
        assert_eq!(state.ships.count(&Default::default()).await?, 0);
        Ok(())
    }
}
