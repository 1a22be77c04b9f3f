//! `pendulum init`: write a default `pendulum.toml`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::project::{ProjectConfig, FILE_NAME};

pub fn run(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(FILE_NAME);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, ProjectConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
