//! In-memory route index
//!
//! [`RouteIndex`] owns the flattened result of scanning every configured
//! root. It is rebuilt wholesale by [`RouteIndex::rebuild`] and read-only in
//! between; queries borrow it.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::matcher::{self, MatchKind};
use crate::models::{IndexStats, RouteEntry, RouteRoot};
use crate::scanner::RouteScanner;

/// Routes discovered under a project, in root order then traversal order
#[derive(Debug, Clone)]
pub struct RouteIndex {
    project_root: PathBuf,
    roots: Vec<RouteRoot>,
    scanner: RouteScanner,
    entries: Vec<RouteEntry>,
    stats: IndexStats,
}

impl RouteIndex {
    /// Create an empty index for `project_root`; call [`rebuild`](Self::rebuild)
    /// to populate it
    ///
    /// A relative `project_root` is made absolute against the current
    /// directory, so every indexed `file` is an absolute path.
    pub fn new(project_root: impl Into<PathBuf>, roots: Vec<RouteRoot>) -> Self {
        let project_root = project_root.into();
        let project_root = std::path::absolute(&project_root).unwrap_or(project_root);

        Self {
            project_root,
            roots,
            scanner: RouteScanner::default(),
            entries: Vec::new(),
            stats: IndexStats::default(),
        }
    }

    /// Create an empty index using the roots and scan options from `config`
    pub fn from_config(project_root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(project_root, config.roots()).with_scanner(RouteScanner::new(config.routes.follow_symlinks))
    }

    pub fn with_scanner(mut self, scanner: RouteScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Clear the index and rescan every configured root that exists
    ///
    /// Roots are scanned in configuration order and their results appended;
    /// routes found under more than one root are all kept.
    pub fn rebuild(&mut self) -> &IndexStats {
        log::info!("Rebuilding route index for {:?}", self.project_root);

        let mut entries = Vec::new();
        let mut stats = IndexStats::default();

        for root in &self.roots {
            let abs_dir = root.resolve(&self.project_root);
            if !abs_dir.is_dir() {
                log::debug!("Route root '{}' not found, skipping", root.path);
                continue;
            }

            let found = self.scanner.scan(&abs_dir, root.convention, &root.path);
            *stats.routes_by_source.entry(root.path.clone()).or_insert(0) += found.len();
            stats.roots_scanned += 1;
            entries.extend(found);
        }

        stats.total_routes = entries.len();
        log::info!(
            "Indexed {} routes from {} roots",
            stats.total_routes,
            stats.roots_scanned
        );

        self.entries = entries;
        self.stats = stats;
        &self.stats
    }

    /// Entries matching `query`, in index order
    pub fn find(&self, query: &str) -> Vec<&RouteEntry> {
        matcher::match_routes(&self.entries, query)
    }

    /// Entries matching `query` with the rule that admitted each
    pub fn find_with_kind(&self, query: &str) -> Vec<(&RouteEntry, MatchKind)> {
        matcher::match_routes_with_kind(&self.entries, query)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn roots(&self) -> &[RouteRoot] {
        &self.roots
    }

    /// Statistics from the last rebuild
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Convention;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_new_index_is_empty() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app/page.tsx");

        let index = RouteIndex::new(temp.path(), RouteRoot::defaults());
        assert!(index.is_empty());
        assert_eq!(index.stats().total_routes, 0);
    }

    #[test]
    fn test_rebuild_unions_roots_in_order() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "pages/about.tsx");
        touch(temp.path(), "src/app/about/page.tsx");
        touch(temp.path(), "app/blog/page.tsx");

        let mut index = RouteIndex::new(temp.path(), RouteRoot::defaults());
        let stats = index.rebuild().clone();

        let sources: Vec<&str> = index.entries().iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["src/app", "app", "pages"]);
        assert_eq!(stats.total_routes, 3);
        assert_eq!(stats.roots_scanned, 3);
        assert_eq!(stats.routes_by_source.get("pages"), Some(&1));
        assert!(!stats.routes_by_source.contains_key("src/pages"));

        // duplicates across roots are kept
        let about: Vec<&RouteEntry> = index.find("about");
        assert_eq!(about.len(), 2);
    }

    #[test]
    fn test_rebuild_replaces_previous_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app/one/page.tsx");

        let mut index = RouteIndex::new(temp.path(), vec![RouteRoot::new("app", Convention::App)]);
        index.rebuild();
        assert_eq!(index.len(), 1);

        std::fs::remove_dir_all(temp.path().join("app/one")).unwrap();
        touch(temp.path(), "app/two/page.tsx");
        touch(temp.path(), "app/three/page.tsx");
        index.rebuild();

        let routes: Vec<&str> = index.entries().iter().map(|e| e.route.as_str()).collect();
        assert_eq!(routes, vec!["three", "two"]);
    }

    #[test]
    fn test_relative_project_root_yields_absolute_files() {
        let index = RouteIndex::new("some/project", RouteRoot::defaults());
        assert!(index.project_root().is_absolute());
        assert!(index.project_root().ends_with("some/project"));
    }

    #[test]
    fn test_rebuild_without_roots_on_disk() {
        let temp = TempDir::new().unwrap();
        let mut index = RouteIndex::new(temp.path(), RouteRoot::defaults());
        let stats = index.rebuild();
        assert_eq!(stats.roots_scanned, 0);
        assert!(index.is_empty());
        assert!(index.find("anything").is_empty());
    }
}
