//! CLI argument parsing and command handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::editor;
use crate::index::RouteIndex;
use crate::matcher::MatchKind;
use crate::models::RouteEntry;
use crate::output;
use crate::picker::{self, PickerOutcome, NO_RESULTS_LABEL};

/// Route Finder: jump from a URL route to the file that defines it
#[derive(Parser, Debug)]
#[command(
    name = "rf",
    version,
    about = "Find the file behind a file-based route",
    long_about = "Scans app/ and pages/ style routing directories, indexes every route \
                  they define, and finds the file for a route path such as /users/42 or \
                  /blog.\n\n\
                  Run 'rf' with no arguments to open the interactive picker."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to current directory)
    #[arg(short = 'C', long, value_name = "PATH", default_value = ".", global = true)]
    pub project: PathBuf,

    /// Route directory to scan, relative to the project root; replaces the
    /// configured list (can be repeated)
    #[arg(long = "root", value_name = "PATH", global = true)]
    pub roots: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive route picker
    Pick {
        /// Pre-fill the picker with this query
        query: Option<String>,
    },

    /// Print the routes matching a path
    ///
    /// A route matches when it equals the query, matches it segment by
    /// segment with [param] placeholders, contains it, or is contained in it.
    ///
    /// Examples:
    ///   rf find /users/42          # matches users/[id]
    ///   rf find blog --json
    ///   rf find /settings --open   # open the first match in $EDITOR
    Find {
        /// Route path, with or without a leading slash
        query: String,

        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,

        /// Open the first match in the editor
        #[arg(short, long)]
        open: bool,
    },

    /// List every indexed route
    List {
        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,
    },

    /// Show the route directories that are probed
    Roots,
}

/// JSON shape of a `find` match
#[derive(Debug, Serialize)]
struct MatchOutput<'a> {
    route: String,
    file: &'a Path,
    source: &'a str,
    matched_by: MatchKind,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

        let project_root = std::fs::canonicalize(&self.project)
            .with_context(|| format!("Project root {} not found", self.project.display()))?;

        let mut config = Config::load(&project_root)?;
        config.override_roots(&self.roots);

        match self.command {
            None => handle_pick(&project_root, &config, None),
            Some(Command::Pick { query }) => handle_pick(&project_root, &config, query),
            Some(Command::Find { query, json, pretty, open }) => {
                handle_find(&project_root, &config, &query, json, pretty, open)
            }
            Some(Command::List { json, pretty }) => handle_list(&project_root, &config, json, pretty),
            Some(Command::Roots) => handle_roots(&project_root, &config),
        }
    }
}

/// Build the index once for this invocation
fn build_index(project_root: &Path, config: &Config) -> RouteIndex {
    let mut index = RouteIndex::from_config(project_root, config);
    index.rebuild();

    if index.stats().roots_scanned == 0 {
        let probed: Vec<String> = index.roots().iter().map(|r| r.path.clone()).collect();
        output::warn(&format!(
            "No route directories found under {} (looked for: {})",
            project_root.display(),
            probed.join(", ")
        ));
    }

    index
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Handle the default command and `pick`
fn handle_pick(project_root: &Path, config: &Config, query: Option<String>) -> Result<()> {
    log::info!("Launching route picker");
    let mut index = build_index(project_root, config);

    match picker::run_picker(&mut index, query)? {
        PickerOutcome::Open(file) => editor::open_file(&config.editor, &file),
        PickerOutcome::Cancelled => Ok(()),
    }
}

/// Handle the `find` subcommand
fn handle_find(project_root: &Path, config: &Config, query: &str, json: bool, pretty: bool, open: bool) -> Result<()> {
    let index = build_index(project_root, config);
    let matches = index.find_with_kind(query);

    if json {
        let out: Vec<MatchOutput> = matches
            .iter()
            .map(|(entry, kind)| MatchOutput {
                route: entry.display_route(),
                file: &entry.file,
                source: &entry.source,
                matched_by: *kind,
            })
            .collect();
        println!("{}", to_json(&out, pretty)?);
    } else if matches.is_empty() {
        println!("{}", NO_RESULTS_LABEL);
    } else {
        let width = label_width(matches.iter().map(|(entry, _)| *entry), project_root);
        for (entry, kind) in &matches {
            println!(
                "{:<width$}  {}  ({})",
                entry.relative_file(project_root),
                entry.display_route(),
                kind,
                width = width
            );
        }
    }

    if open {
        match matches.first() {
            Some((entry, _)) => editor::open_file(&config.editor, &entry.file)?,
            None => output::note("Nothing to open."),
        }
    }

    Ok(())
}

/// Handle the `list` subcommand
fn handle_list(project_root: &Path, config: &Config, json: bool, pretty: bool) -> Result<()> {
    let index = build_index(project_root, config);

    if json {
        println!("{}", to_json(index.entries(), pretty)?);
        return Ok(());
    }

    if index.is_empty() {
        println!("No routes indexed.");
        return Ok(());
    }

    let width = label_width(index.entries().iter(), project_root);
    for entry in index.entries() {
        println!(
            "{:<width$}  {}",
            entry.relative_file(project_root),
            entry.display_route(),
            width = width
        );
    }

    let stats = index.stats();
    let per_source: Vec<String> = stats
        .routes_by_source
        .iter()
        .map(|(source, count)| format!("{}: {}", source, count))
        .collect();
    output::note(&format!("\n{} routes ({})", stats.total_routes, per_source.join(", ")));

    Ok(())
}

/// Handle the `roots` subcommand
fn handle_roots(project_root: &Path, config: &Config) -> Result<()> {
    println!("Route directories under {}:", project_root.display());
    for root in config.roots() {
        let status = if root.resolve(project_root).is_dir() {
            "found"
        } else {
            "missing"
        };
        println!("  {:<16} {:<6} {}", root.path, root.convention, status);
    }
    Ok(())
}

fn label_width<'a>(entries: impl Iterator<Item = &'a RouteEntry>, project_root: &Path) -> usize {
    entries
        .map(|entry| entry.relative_file(project_root).len())
        .max()
        .unwrap_or(0)
}
