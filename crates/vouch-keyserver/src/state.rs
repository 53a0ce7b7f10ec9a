use sqlx::SqlitePool;
use std::{fs, path::Path};

use crate::config::AppConfig;

/// Shared application state: config plus the key database pool.
#[derive(Clone)]
pub struct AppState {
    pub cfg: AppConfig,
    pub db: SqlitePool,
}

impl AppState {
    pub async fn init(cfg: &AppConfig) -> anyhow::Result<Self> {
        ensure_parent_dir(&cfg.database_path)?;
        let pool = SqlitePool::connect(&sqlite_url(&cfg.database_path)).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            cfg: cfg.clone(),
            db: pool,
        })
    }
}

fn sqlite_url(path: &str) -> String {
    // mode=rwc creates the database file on first run
    if Path::new(path).is_absolute() {
        format!("sqlite:{path}?mode=rwc")
    } else {
        format!("sqlite://{path}?mode=rwc")
    }
}

fn ensure_parent_dir(file_path: &str) -> anyhow::Result<()> {
    let p = Path::new(file_path);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
