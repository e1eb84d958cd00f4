//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::print_environment;
use crate::config::{load_effective, ConfigFormat, ConfigLoader, Conflict, EmptyBase, MergeOptions};

#[derive(Args)]
pub struct MergeArgs {
    /// Base (default) config file
    #[arg(short, long, value_name = "PATH")]
    pub base: PathBuf,

    /// User config file merged over the base (default: config.* under --root)
    #[arg(short = 'o', long = "override", value_name = "PATH", env = "MAGE_CONFIG")]
    pub user: Option<PathBuf>,

    /// Directory searched for the default user config
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Json)]
    pub format: ConfigFormat,

    /// Combine with empty base sequences/mappings instead of treating them as unset
    #[arg(long)]
    pub combine_empty: bool,

    /// What to do when a user sequence/mapping meets a base value of another kind
    #[arg(long, value_enum, default_value_t = Conflict::Fail)]
    pub on_conflict: Conflict,
}

impl MergeArgs {
    fn options(&self) -> MergeOptions {
        MergeOptions {
            empty_base: if self.combine_empty { EmptyBase::Combine } else { EmptyBase::Overwrite },
            on_conflict: self.on_conflict,
        }
    }
}

pub fn run(args: MergeArgs) -> Result<()> {
    let options = args.options();
    let mut loader = ConfigLoader::new(&args.root);

    let effective = load_effective(&mut loader, &args.base, args.user.as_deref(), &options)
        .with_context(|| format!("Failed merging config over {}", args.base.display()))?;

    tracing::debug!(
        "Effective config has {} entries: {}",
        effective.len(),
        effective.names().join(", ")
    );
    print_environment(&effective, args.format)
}
