#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// 整个测试进程只迁移一次；false 表示数据库不可用
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(DatabaseConfig::from_env);
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(5);
    cfg.connect_timeout = std::time::Duration::from_secs(5);
    cfg
}

/// Connection for DB-backed tests, or `None` when they should be skipped.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&test_config()).await else { return false };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    if !migrated {
        eprintln!("skipping: database unavailable");
        return None;
    }
    connect_with_config(&test_config()).await.ok()
}
