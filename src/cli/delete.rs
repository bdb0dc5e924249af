use std::path::Path;

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::cli::output;
use crate::config;
use crate::error::GateError;
use crate::platform::suggest_names;

#[derive(ClapArgs)]
pub struct Args {
    /// Name of the platform to delete
    pub name: String,
}

pub fn run(args: Args, config_path: Option<&Path>) -> Result<()> {
    let mut cfg = config::load(config_path)?;

    if cfg.remove(&args.name).is_none() {
        return Err(GateError::PlatformNotFound {
            suggestions: suggest_names(&cfg.platforms, &args.name),
            name: args.name,
        }
        .into());
    }

    config::save(&cfg, config_path)?;
    output::success(&format!("Platform '{}' deleted", args.name));
    Ok(())
}
