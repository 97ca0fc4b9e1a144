//! Opening route files in the user's editor

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::EditorConfig;

/// Resolve the editor command: config, then `$VISUAL`, then `$EDITOR`, then `vi`
pub fn resolve_editor(config: &EditorConfig) -> String {
    config
        .command
        .clone()
        .filter(|cmd| !cmd.trim().is_empty())
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

/// Split an editor command into program and leading arguments
///
/// `"code --wait"` becomes `("code", ["--wait"])`. Quoting follows shell
/// rules, so `"'/Applications/Sublime Text/subl' -w"` keeps the path whole.
fn split_command(editor: &str) -> Result<(String, Vec<String>)> {
    let mut parts = shell_words::split(editor)
        .with_context(|| format!("Failed to parse editor command '{}'", editor))?;

    if parts.is_empty() {
        anyhow::bail!("Empty editor command");
    }

    let program = parts.remove(0);
    Ok((program, parts))
}

/// Build the full argument list for opening `file`
pub fn editor_args(editor: &str, file: &Path) -> Result<(String, Vec<String>)> {
    let (program, mut args) = split_command(editor)?;
    let file = file.to_string_lossy().to_string();

    let name = Path::new(&program)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| program.clone());

    match name.as_str() {
        // Reuse the running window instead of spawning a new one
        "code" | "codium" | "cursor" => {
            args.push("-r".to_string());
            args.push(file);
        }
        _ => args.push(file),
    }

    Ok((program, args))
}

/// Open `file` in the configured editor and wait for it to exit
pub fn open_file(config: &EditorConfig, file: &Path) -> Result<()> {
    let editor = resolve_editor(config);
    let (program, args) = editor_args(&editor, file)?;

    log::info!("Opening {} with {}", file.display(), program);

    let status = Command::new(&program)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", program))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error code: {:?}", status.code());
    }

    Ok(())
}
