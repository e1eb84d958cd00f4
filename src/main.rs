//! mage-config: merge user configuration over framework defaults

use anyhow::Result;

fn main() -> Result<()> {
    mage_config::cli::run()
}
