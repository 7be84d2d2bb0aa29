pub mod schema;

pub use schema::Config;

use crate::core::error::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: Self::default_config_dir().join(CONFIG_FILE),
        })
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn default_config_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "venv-run", "venv-run") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".venv-run")
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// A missing config file is not an error; defaults apply.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
