//! Configuration of the `padmap` binary
//!
//! ```toml
//! backend = "sdl2"            # or "legacy"
//! poll_interval_ms = 16
//! use_env_mappings = true     # read SDL_GAMECONTROLLERCONFIG
//! mapping_files = ["/usr/share/padmap/gamecontrollerdb.txt"]
//! mappings = [
//!     "030000005e0400008e02000014010000,My Pad,a:b0,b:b1,",
//! ]
//! ```
//!
//! Every field is optional. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::controller::controller_handle::ControllerSettings;
use crate::mapping::database::{ControllerDatabase, InputBackend};

const CONFIG_DIR: &str = "padmap";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding newline separated mapping records
pub const ENV_MAPPINGS: &str = "SDL_GAMECONTROLLERCONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Raw ordinal layout of the input layer; selects the unknown-device fallback
    pub backend: InputBackend,
    pub poll_interval_ms: u64,
    pub use_env_mappings: bool,
    /// Extra `gamecontrollerdb.txt` files, loaded in order
    pub mapping_files: Vec<PathBuf>,
    /// Inline records, applied last
    pub mappings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: InputBackend::default(),
            poll_interval_ms: 16,
            use_env_mappings: true,
            mapping_files: Vec::new(),
            mappings: Vec::new(),
        }
    }
}

impl Config {
    /// `<config dir>/padmap/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| {
            warn!("Could not determine config directory, using current directory");
            PathBuf::from(".")
        });
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    /// Loads `path`, falling back to defaults when the file does not exist
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        if !exists {
            warn!("Config file {} does not exist, using default", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            poll_interval_ms: self.poll_interval_ms,
        }
    }

    /// Built-in catalog, then the environment, mapping files and inline records.
    ///
    /// Rejected records are logged and skipped; an unreadable mapping file is
    /// an error.
    pub async fn build_database(&self) -> Result<ControllerDatabase, ConfigError> {
        let env_mappings = if self.use_env_mappings {
            std::env::var(ENV_MAPPINGS).ok()
        } else {
            None
        };
        self.build_database_with(env_mappings.as_deref()).await
    }

    async fn build_database_with(
        &self,
        env_mappings: Option<&str>,
    ) -> Result<ControllerDatabase, ConfigError> {
        let mut database = ControllerDatabase::new(self.backend);

        if let Some(text) = env_mappings {
            let report = database.add_from_str(text);
            info!(
                "Loaded {} mappings from {} ({} rejected)",
                report.added,
                ENV_MAPPINGS,
                report.rejected.len()
            );
        }

        for path in &self.mapping_files {
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
            let report = database.add_from_str(&text);
            info!(
                "Loaded {} mappings from {} ({} rejected)",
                report.added,
                path.display(),
                report.rejected.len()
            );
        }

        for record in &self.mappings {
            if let Err(e) = database.add(record) {
                warn!("Skipping configured mapping: {}", e);
            }
        }

        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::guid::DeviceGuid;

    const RECORD: &str = "03000000aaaa0000bbbb000000000000,Configured Pad,a:b1,";

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("padmap-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
            backend = "legacy"
            poll_interval_ms = 8
            use_env_mappings = false
            mapping_files = ["/tmp/db.txt"]
            mappings = ["03000000aaaa0000bbbb000000000000,Configured Pad,a:b1,"]
            "#,
        )
        .unwrap();

        assert_eq!(config.backend, InputBackend::Legacy);
        assert_eq!(config.controller_settings().poll_interval_ms, 8);
        assert!(!config.use_env_mappings);
        assert_eq!(config.mapping_files, [PathBuf::from("/tmp/db.txt")]);
        assert_eq!(config.mappings.len(), 1);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Config::from_toml("backend = \"xinput\"").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let config = Config::load(&temp_path("missing.toml")).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_reports_parse_errors() {
        let path = temp_path("broken.toml");
        tokio::fs::write(&path, "poll_interval_ms = \"fast\"").await.unwrap();

        let result = Config::load(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[tokio::test]
    async fn test_build_database_layers_sources() {
        let path = temp_path("db.txt");
        tokio::fs::write(
            &path,
            "# extra\n03000000cccc0000dddd000000000000,File Pad,a:b2,\n",
        )
        .await
        .unwrap();

        let config = Config {
            backend: InputBackend::Legacy,
            mapping_files: vec![path.clone()],
            mappings: vec![RECORD.to_string(), "garbage".to_string()],
            ..Config::default()
        };
        let database = config
            .build_database_with(Some("03000000eeee0000ffff000000000000,Env Pad,a:b3,"))
            .await;
        tokio::fs::remove_file(&path).await.unwrap();
        let database = database.unwrap();

        assert_eq!(database.backend(), InputBackend::Legacy);
        for (guid, name) in [
            ("03000000aaaa0000bbbb000000000000", "Configured Pad"),
            ("03000000cccc0000dddd000000000000", "File Pad"),
            ("03000000eeee0000ffff000000000000", "Env Pad"),
        ] {
            let guid: DeviceGuid = guid.parse().unwrap();
            assert_eq!(database.resolve(&guid).name, name);
        }
    }

    #[tokio::test]
    async fn test_missing_mapping_file_is_an_error() {
        let config = Config {
            mapping_files: vec![temp_path("absent-db.txt")],
            ..Config::default()
        };
        let result = config.build_database_with(None).await;
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
