use std::{env, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::portal::repo::{memory::InMemoryPortalRepository, seaorm::SeaOrmPortalRepository};
use service::portal::{PortalController, PortalService};

use crate::errors::StartupError;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); without a file, fall back to env vars
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_config_from(Path::new(&path))
}

/// A file that exists but does not parse or validate is an error, never skipped
pub fn load_config_from(path: &Path) -> Result<AppConfig, StartupError> {
    let mut cfg = if path.exists() {
        configs::load_from_file(&path.to_string_lossy())
            .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", path.display())))?
    } else {
        config_from_env()?
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn config_from_env() -> Result<AppConfig, StartupError> {
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Ok(port) = env::var("SERVER_PORT") {
        cfg.server.port = port
            .parse::<u16>()
            .map_err(|_| StartupError::InvalidConfig(format!("SERVER_PORT `{port}` is not a port number")))?;
    }
    if let Ok(backend) = env::var("STORAGE_BACKEND") {
        cfg.storage.backend = backend.parse()?;
    }
    cfg.storage.seed_path = env::var("PORTAL_SEED_PATH").ok();
    Ok(cfg)
}

/// Wire the configured storage backend into a portal controller
pub async fn build_controller(cfg: &AppConfig) -> Result<PortalController, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
            models::db::test_connection(&db).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await.map_err(anyhow::Error::from)?;
                info!("migrations applied");
            }
            let repo = Arc::new(SeaOrmPortalRepository::new(db));
            Ok(PortalController::new(Arc::new(PortalService::new(repo))))
        }
        StorageBackend::Memory => {
            let repo = match &cfg.storage.seed_path {
                Some(path) => {
                    let repo = InMemoryPortalRepository::from_seed_file(path)
                        .await
                        .map_err(|e| StartupError::Seed(format!("{path}: {e}")))?;
                    info!(seed = %path, "memory backend seeded");
                    repo
                }
                None => {
                    warn!("memory backend started without seed data");
                    InMemoryPortalRepository::new()
                }
            };
            Ok(PortalController::new(Arc::new(PortalService::new(Arc::new(repo)))))
        }
    }
}

/// Build the application router for a configuration
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let controller = build_controller(cfg).await?;
    Ok(routes::build_router(controller, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting portal server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(body: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("portal_cfg_{}.toml", uuid::Uuid::new_v4().simple()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn unparsable_file_is_rejected_not_skipped() {
        let path = write_config("[storage]\nbackend = \"memroy\"\nseed_path = \"data/seed.json\"\n");
        let res = load_config_from(&path);
        std::fs::remove_file(&path).ok();
        match res {
            Err(StartupError::InvalidConfig(msg)) => assert!(msg.contains("portal_cfg_")),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = write_config("[server]\nhost = \"127.0.0.1\"\nport = 0\n\n[storage]\nbackend = \"memory\"\n");
        let res = load_config_from(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(res, Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn valid_file_is_used_as_written() {
        let path = write_config("[server]\nhost = \"0.0.0.0\"\nport = 9090\n\n[storage]\nbackend = \"memory\"\nseed_path = \"data/seed.json\"\n");
        let res = load_config_from(&path);
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.seed_path.as_deref(), Some("data/seed.json"));
    }
}
