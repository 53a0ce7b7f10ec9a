use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address, e.g. "127.0.0.1:8787"
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Path to the SQLite file holding registered keys.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_database_path() -> String {
    "data/keyserver.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            database_path: default_database_path(),
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let cfg: AppConfig = toml::from_str(&raw)?;
    Ok(cfg)
}

fn config_path() -> PathBuf {
    if let Ok(p) = env::var("VOUCH_KEYSERVER_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("keyserver.toml")
}
