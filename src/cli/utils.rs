//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::ConfigFormat;
use crate::domain::ConfigEnvironment;

/// Render the non-reserved entries of `env` to stdout.
pub fn print_environment(env: &ConfigEnvironment, format: ConfigFormat) -> Result<()> {
    let rendered = format
        .render(env)
        .with_context(|| format!("Failed rendering config environment '{}'", env.name()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).context("Failed writing to stdout")?;
    stdout.flush().context("Failed writing to stdout")
}
