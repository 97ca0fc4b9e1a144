//! User-facing output utilities for clean, colored terminal messages
//!
//! Warnings and errors go to stderr without the log formatting
//! (timestamps, levels, module paths) that `env_logger` adds.

use owo_colors::OwoColorize;

/// Display a warning message to the user in yellow with padding
///
/// # Example
/// ```ignore
/// output::warn("No route directories found under the project root.");
/// ```
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Display an error message to the user in red with padding
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}

/// Display a dimmed informational line on stderr
pub fn note(message: &str) {
    eprintln!("{}", message.dimmed());
}
