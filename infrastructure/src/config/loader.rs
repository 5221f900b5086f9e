//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["transkey.toml", ".transkey.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `transkey.toml` or `.transkey.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/transkey/config.toml`
    /// 4. Default values
    pub fn load(
        config_path: Option<&PathBuf>,
        project_root: &Path,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("Merging global config {:?}", global_path);
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config file (first name that exists)
        if let Some(path) = Self::project_config_path(project_root) {
            debug!("Merging project config {:?}", path);
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            debug!("Merging explicit config {:?}", path);
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/transkey/config.toml if set,
    /// otherwise falls back to ~/.config/transkey/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("transkey").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path(project_root: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(project_root: &Path) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        // Project config
        match Self::project_config_path(project_root) {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: {}/transkey.toml or .transkey.toml",
                project_root.display()
            )),
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}
