//! Config command: print the effective or the example configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CliResult;

pub fn execute(config: &Config, example: bool, write: Option<PathBuf>) -> Result<()> {
    match write {
        Some(path) => {
            write_config(config, example, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Configuration written to: {}", path.display());
        }
        None => print!("{}", render(config, example)?),
    }
    Ok(())
}

/// Save the effective configuration, or the defaults when `example` is set.
pub fn write_config(config: &Config, example: bool, path: &Path) -> CliResult<()> {
    if example {
        Config::default().save_to_file(path)
    } else {
        config.save_to_file(path)
    }
}

pub fn render(config: &Config, example: bool) -> CliResult<String> {
    if example {
        Config::example_toml()
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}
