//! Core data models for Route Finder
//!
//! These structures describe the routes discovered on disk and the
//! configured root directories they were discovered from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strum::{Display, EnumString};

/// File-based routing layout used by a root directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Convention {
    /// Directory defines the route; only special files (`page.tsx`,
    /// `layout.js`, `route.ts`, ...) register it
    App,
    /// Every script file is a route; its basename is the last segment,
    /// except `index` which maps to its directory
    Pages,
}

/// Special basenames recognised under the `App` convention
pub const APP_ROUTE_FILENAMES: &[&str] = &[
    "page.tsx",
    "page.jsx",
    "page.js",
    "page.ts",
    "layout.tsx",
    "layout.jsx",
    "layout.js",
    "layout.ts",
    "route.ts",
    "route.js",
];

/// Script extensions recognised under the `Pages` convention
pub const PAGE_EXTENSIONS: &[&str] = &["tsx", "jsx", "js", "ts"];

impl Convention {
    /// Infer the convention from a root's relative path
    ///
    /// Any path mentioning `app` is treated as an app directory, everything
    /// else as a pages directory.
    pub fn infer(path: &str) -> Self {
        if path.contains("app") {
            Convention::App
        } else {
            Convention::Pages
        }
    }
}

/// A configured root directory, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteRoot {
    /// Path relative to the project root (e.g. `src/app`)
    pub path: String,
    /// Routing convention applied to every file under this root
    pub convention: Convention,
}

impl RouteRoot {
    pub fn new(path: impl Into<String>, convention: Convention) -> Self {
        Self {
            path: path.into(),
            convention,
        }
    }

    /// Build a root whose convention is inferred from its path
    pub fn inferred(path: impl Into<String>) -> Self {
        let path = path.into();
        let convention = Convention::infer(&path);
        Self { path, convention }
    }

    /// The default probe list, in priority order
    pub fn defaults() -> Vec<RouteRoot> {
        vec![
            RouteRoot::new("src/app", Convention::App),
            RouteRoot::new("app", Convention::App),
            RouteRoot::new("src/pages", Convention::Pages),
            RouteRoot::new("pages", Convention::Pages),
        ]
    }

    /// Absolute location of this root under `project_root`
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.path)
    }
}

/// A route discovered on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Slash-separated route without a leading slash; `[name]` marks a
    /// dynamic segment and the root route is the empty string
    pub route: String,
    /// Absolute path of the file defining the route
    pub file: PathBuf,
    /// Configured root (relative path) that produced this entry
    pub source: String,
}

impl RouteEntry {
    pub fn new(route: impl Into<String>, file: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            file: file.into(),
            source: source.into(),
        }
    }

    /// Route rendered the way a user types it: `/blog/[slug]`, `/` for root
    pub fn display_route(&self) -> String {
        format!("/{}", self.route)
    }

    /// File path relative to the project root, or the absolute path when the
    /// file lives elsewhere (e.g. reached through a symlink)
    pub fn relative_file(&self, project_root: &Path) -> String {
        self.file
            .strip_prefix(project_root)
            .unwrap_or(&self.file)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

/// Summary of the last index rebuild
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexStats {
    /// Total routes in the index
    pub total_routes: usize,
    /// Number of configured roots that existed and were scanned
    pub roots_scanned: usize,
    /// Route count per source root
    pub routes_by_source: BTreeMap<String, usize>,
}
