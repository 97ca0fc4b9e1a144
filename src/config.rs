//! Configuration for route discovery and file opening
//!
//! Settings are read from `<project>/.routefinder/config.toml`, falling back
//! to `~/.routefinder/config.toml`, then to built-in defaults.
//!
//! ```toml
//! [routes]
//! roots = [
//!     { path = "src/app", convention = "app" },
//!     { path = "pages" },            # convention inferred from the path
//! ]
//! follow_symlinks = true
//!
//! [editor]
//! command = "code"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{Convention, RouteRoot};

/// Directory holding the per-project configuration
pub const CONFIG_DIR: &str = ".routefinder";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// `[routes]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutesConfig {
    /// Root directories to probe, in priority order
    #[serde(default = "default_roots")]
    pub roots: Vec<RootConfig>,

    /// Follow symbolic links while scanning
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
}

/// One entry of `routes.roots`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootConfig {
    pub path: String,
    /// Inferred from `path` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convention: Option<Convention>,
}

/// `[editor]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorConfig {
    /// Editor command; `$VISUAL`, then `$EDITOR` when unset
    #[serde(default)]
    pub command: Option<String>,
}

fn default_roots() -> Vec<RootConfig> {
    RouteRoot::defaults()
        .into_iter()
        .map(|root| RootConfig {
            path: root.path,
            convention: Some(root.convention),
        })
        .collect()
}

fn default_follow_symlinks() -> bool {
    true
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            follow_symlinks: default_follow_symlinks(),
        }
    }
}

impl RootConfig {
    pub fn to_root(&self) -> RouteRoot {
        match self.convention {
            Some(convention) => RouteRoot::new(self.path.clone(), convention),
            None => RouteRoot::inferred(self.path.clone()),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse route finder config")
    }

    /// Load the configuration that applies to `project_root`
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(project_root: &Path) -> Result<Self> {
        let project_config = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
        if project_config.is_file() {
            return Self::load_file(&project_config);
        }

        match user_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => {
                log::debug!("No config.toml found, using default route roots");
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Configured roots with conventions resolved
    pub fn roots(&self) -> Vec<RouteRoot> {
        self.routes.roots.iter().map(RootConfig::to_root).collect()
    }

    /// Replace the configured roots (e.g. from `--root` flags)
    pub fn override_roots(&mut self, paths: &[String]) {
        if paths.is_empty() {
            return;
        }
        self.routes.roots = paths
            .iter()
            .map(|path| RootConfig {
                path: path.clone(),
                convention: None,
            })
            .collect();
    }
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.routes.follow_symlinks);
        assert_eq!(config.roots(), RouteRoot::defaults());
        assert!(config.editor.command.is_none());
    }

    #[test]
    fn test_parse_roots_with_inference() {
        let config = Config::from_toml(
            r#"
            [routes]
            roots = [
                { path = "apps/web/app" },
                { path = "legacy", convention = "app" },
                { path = "site/pages" },
            ]
            follow_symlinks = false
            "#,
        )
        .unwrap();

        assert!(!config.routes.follow_symlinks);
        assert_eq!(
            config.roots(),
            vec![
                RouteRoot::new("apps/web/app", Convention::App),
                RouteRoot::new("legacy", Convention::App),
                RouteRoot::new("site/pages", Convention::Pages),
            ]
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("[editor]\ncommand = \"nvim\"\n").unwrap();
        assert_eq!(config.editor.command.as_deref(), Some("nvim"));
        assert_eq!(config.roots(), RouteRoot::defaults());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Config::from_toml("[routes]\nroots = 3\n").is_err());
        assert!(Config::from_toml("[routes]\nroots = [{ path = \"app\", convention = \"remix\" }]\n").is_err());
    }

    #[test]
    fn test_load_project_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILE),
            "[routes]\nroots = [{ path = \"web/pages\" }]\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.roots(), vec![RouteRoot::new("web/pages", Convention::Pages)]);
    }

    #[test]
    fn test_override_roots() {
        let mut config = Config::default();
        config.override_roots(&[]);
        assert_eq!(config.roots(), RouteRoot::defaults());

        config.override_roots(&["frontend/app".to_string()]);
        assert_eq!(config.roots(), vec![RouteRoot::new("frontend/app", Convention::App)]);
    }
}
