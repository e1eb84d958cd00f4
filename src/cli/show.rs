//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::print_environment;
use crate::config::{ConfigFormat, ConfigLoader};

#[derive(Args)]
pub struct ShowArgs {
    /// Config file to load (default: config.* under --root)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory searched for the default config
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Json)]
    pub format: ConfigFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut loader = ConfigLoader::new(&args.root);

    let loaded = loader.load_default(args.path.as_deref()).with_context(|| match &args.path {
        Some(path) => format!("Failed loading config {}", path.display()),
        None => format!("Failed loading default config under {}", args.root.display()),
    })?;

    let Some(env) = loaded else {
        eprintln!("No config file found under {}", args.root.display());
        return Ok(());
    };

    print_environment(&env, args.format)
}
