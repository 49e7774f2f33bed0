//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant config store.
///
/// Without a config dir or a home dir there is no file to read and the
/// store behaves as if the file were absent.
pub struct XdgConfigStore {
    path: Option<PathBuf>,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        Self {
            path: default_path(dirs::config_dir(), dirs::home_dir()),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// `<config>/lola-announce/config.toml`, with `~/.config` standing in for
/// a missing config dir
fn default_path(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .map(|dir| dir.join("lola-announce").join("config.toml"))
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = self.path.as_ref().filter(|path| path.exists()) else {
            return Ok(AppConfig::empty());
        };

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_default()
    }

    fn exists(&self) -> bool {
        self.path.as_ref().is_some_and(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("lola-announce"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn default_path_falls_back_to_home() {
        let path = default_path(None, Some(PathBuf::from("/home/lola")));
        assert_eq!(
            path,
            Some(PathBuf::from("/home/lola/.config/lola-announce/config.toml"))
        );

        let path = default_path(Some(PathBuf::from("/xdg")), Some(PathBuf::from("/home/lola")));
        assert_eq!(path, Some(PathBuf::from("/xdg/lola-announce/config.toml")));
    }

    #[tokio::test]
    async fn no_config_location_loads_empty() {
        assert_eq!(default_path(None, None), None);

        let store = XdgConfigStore { path: None };
        assert!(!store.exists());
        let config = store.load().await.unwrap();
        assert!(config.app_name.is_none());
        assert!(config.urgency.is_none());
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
app_name = "Lola"
urgency = "critical"
icon = "/usr/share/pixmaps/lola.png"
notifier = "notify-rust"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.app_name, Some("Lola".to_string()));
        assert_eq!(config.urgency, Some("critical".to_string()));
        assert_eq!(config.icon, Some(PathBuf::from("/usr/share/pixmaps/lola.png")));
        assert_eq!(config.notifier, Some("notify-rust".to_string()));
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        let err = XdgConfigStore::parse_toml("urgency = 3").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        assert!(!store.exists());
        let config = store.load().await.unwrap();
        assert!(config.app_name.is_none());
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "urgency = \"low\"\n").unwrap();

        let config = XdgConfigStore::with_path(&path).load().await.unwrap();
        assert_eq!(config.urgency, Some("low".to_string()));
    }
}
