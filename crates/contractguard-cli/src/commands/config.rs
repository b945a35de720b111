//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command. `path_override` is the `--config` path, if any.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path_override: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Path => {
            let path = resolve_path(path_override)?;
            println!("{}", describe_path(&path, formatter));
        }
        ConfigAction::Init { force } => {
            let path = resolve_path(path_override)?;
            init_config(&path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }

    Ok(())
}

/// Write the default configuration to `path`. Refuses to overwrite an
/// existing file unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

fn resolve_path(path_override: Option<&Path>) -> Result<PathBuf> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::path(),
    }
}

fn describe_path(path: &Path, formatter: &Formatter) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!(
            "{} {}",
            path.display(),
            formatter.warning("(not created yet, defaults in use)")
        )
    }
}
