//! Route Finder: jump from a route path to the file that defines it
//!
//! Route Finder scans a project's file-based routing directories (Next.js
//! style `app/` and `pages/` layouts), indexes every route they define, and
//! resolves a typed path such as `/users/42` to the files behind it.
//!
//! # Architecture
//!
//! - **Scanner**: walks one root directory and turns files into routes
//! - **Index**: owns the routes of every configured root; rebuilt on demand
//! - **Matcher**: resolves a query against the index (exact, dynamic
//!   segment, substring either way)
//! - **Picker**: interactive TUI over the index
//!
//! # Example Usage
//!
//! ```no_run
//! use route_finder::{RouteIndex, RouteRoot};
//!
//! let mut index = RouteIndex::new(".", RouteRoot::defaults());
//! index.rebuild();
//!
//! for entry in index.find("/users/42") {
//!     println!("{} -> {}", entry.display_route(), entry.file.display());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod editor;
pub mod index;
pub mod matcher;
pub mod models;
pub mod output;
pub mod picker;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use index::RouteIndex;
pub use matcher::{match_routes, MatchKind};
pub use models::{Convention, IndexStats, RouteEntry, RouteRoot};
pub use scanner::RouteScanner;
