//! Route discovery over a file-based routing tree
//!
//! The scanner walks one root directory depth-first and turns every file
//! that follows the root's [`Convention`] into a [`RouteEntry`]. Route-group
//! folders (`(marketing)`) are transparent: files under them are discovered
//! but the folder name never reaches the route.

use std::path::{Component, Path};
use walkdir::WalkDir;

use crate::models::{Convention, RouteEntry, APP_ROUTE_FILENAMES, PAGE_EXTENSIONS};

/// Walks route directories and collects their routes
#[derive(Debug, Clone)]
pub struct RouteScanner {
    follow_symlinks: bool,
}

impl Default for RouteScanner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RouteScanner {
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    /// Scan `root_dir` and return its routes in traversal order
    ///
    /// Entries within a directory are visited sorted by file name, so an
    /// unchanged tree always yields the same sequence. A missing root yields
    /// nothing. Unreadable subdirectories are logged and skipped without
    /// losing the routes already collected from their siblings.
    pub fn scan(&self, root_dir: impl AsRef<Path>, convention: Convention, source: &str) -> Vec<RouteEntry> {
        let root_dir = root_dir.as_ref();
        let root_dir = std::path::absolute(root_dir).unwrap_or_else(|_| root_dir.to_path_buf());
        let root_dir = root_dir.as_path();
        if !root_dir.is_dir() {
            log::debug!("Route root {:?} is not a directory, skipping", root_dir);
            return Vec::new();
        }

        let mut routes = Vec::new();

        let walker = WalkDir::new(root_dir)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable path under {}: {}", root_dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root_dir) else {
                continue;
            };

            let parts = route_parts(relative);
            let file_name = entry.file_name().to_string_lossy();

            if let Some(route) = route_for_file(&parts, &file_name, convention) {
                log::trace!("Discovered route '{}' -> {}", route, entry.path().display());
                routes.push(RouteEntry::new(route, entry.path(), source));
            }
        }

        log::info!("Found {} routes under {} ({})", routes.len(), root_dir.display(), convention);

        routes
    }
}

/// Whether a directory name is a route group, i.e. fully wrapped in parentheses
pub fn is_route_group(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('(') && name.ends_with(')')
}

/// Route segments contributed by the directories between the root and a file
fn route_parts(relative: &Path) -> Vec<String> {
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|component| match component {
                    Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                    _ => None,
                })
                .filter(|name| !is_route_group(name))
                .collect()
        })
        .unwrap_or_default()
}

/// Compute the route a file defines, or `None` when the file does not
/// follow `convention`
///
/// `parts` are the accumulated directory segments leading to the file.
pub fn route_for_file<S: AsRef<str>>(parts: &[S], file_name: &str, convention: Convention) -> Option<String> {
    let mut segments: Vec<&str> = parts
        .iter()
        .map(|part| part.as_ref())
        .filter(|part| !is_route_group(part))
        .collect();

    match convention {
        Convention::App => {
            if !APP_ROUTE_FILENAMES.contains(&file_name) {
                return None;
            }
        }
        Convention::Pages => {
            let path = Path::new(file_name);
            let ext = path.extension()?.to_str()?;
            if !PAGE_EXTENSIONS.contains(&ext) {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            if stem != "index" {
                segments.push(stem);
            }
        }
    }

    Some(segments.join("/"))
}
