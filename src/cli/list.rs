use std::path::Path;

use anyhow::Result;
use clap::Args as ClapArgs;
use colored::Colorize;
use serde::Serialize;

use crate::cli::output;
use crate::config::{self, PlatformEntry};
use crate::launcher::mask_token;

#[derive(ClapArgs)]
pub struct Args {
    /// Output platforms as JSON (tokens masked)
    #[arg(long)]
    pub json: bool,
}

/// JSON row for `list --json`.
#[derive(Serialize)]
struct ListedPlatform<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<&'a str>,
    base_url: &'a str,
    auth_token: String,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    small_model: Option<&'a str>,
}

impl<'a> From<&'a PlatformEntry> for ListedPlatform<'a> {
    fn from(p: &'a PlatformEntry) -> Self {
        ListedPlatform {
            name: &p.name,
            vendor: p.vendor(),
            base_url: &p.base_url,
            auth_token: mask_token(&p.auth_token),
            model: &p.model,
            small_model: p.small_model(),
        }
    }
}

pub fn run(args: Args, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load(config_path)?;

    if args.json {
        let rows: Vec<ListedPlatform> = cfg.platforms.iter().map(ListedPlatform::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if cfg.platforms.is_empty() {
        output::warning("No platforms configured.");
        output::info("Add one with: ccgate add");
        return Ok(());
    }

    output::header(&format!("Available platforms ({})", cfg.platforms.len()));
    for (i, platform) in cfg.platforms.iter().enumerate() {
        eprintln!();
        eprintln!("{} {}", format!("{}.", i + 1).green(), platform.name.bold());
        if let Some(vendor) = platform.vendor() {
            output::field("Vendor", vendor);
        }
        output::field("API", &platform.base_url);
        output::field("Model", &platform.model);
        if let Some(small) = platform.small_model() {
            output::field("Small model", small);
        }
    }
    eprintln!();

    Ok(())
}
