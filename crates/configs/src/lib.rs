use anyhow::Result;
use serde::Deserialize;

/// Listen address defaults: all interfaces, port 8000, overridable through
/// `SERVER_HOST` and `PORT`.
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "monter";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: String,
    /// 0 means "not set"; normalization fills it from `PORT` or the default.
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` if present, then fill gaps from the environment.
    /// Never fails: a missing or unreadable file falls back to env/defaults.
    pub fn load_or_env() -> Self {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_from_env();
        cfg
    }

    pub fn normalize_from_env(&mut self) {
        self.server.normalize_from_env();
        self.database.normalize_from_env();
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if self.host.trim().is_empty() {
            self.host =
                std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        }
        if self.port == 0 {
            self.port = std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
        }
    }
}

impl DatabaseConfig {
    /// Fill url/name from `DATABASE_URL`/`DATABASE_NAME` when the file left
    /// them blank. A malformed URL is not rejected here; the store degrades
    /// at runtime instead of failing startup.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
        if self.name.trim().is_empty() {
            self.name = std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn normalize_fills_blanks() {
        let mut cfg = AppConfig::default();
        cfg.normalize_from_env();
        assert!(!cfg.server.host.trim().is_empty());
        assert_ne!(cfg.server.port, 0);
        assert!(!cfg.database.url.trim().is_empty());
        assert!(!cfg.database.name.trim().is_empty());
    }

    #[test]
    fn toml_values_win_over_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            worker_threads = 2

            [database]
            url = "mongodb://db.internal:27017"
            name = "clinic"
            "#,
        )
        .expect("parse config");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.database.name, "clinic");
    }
}
