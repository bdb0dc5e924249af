use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::cli::output;
use crate::config::{self, PlatformEntry, Upsert};

#[derive(ClapArgs)]
pub struct Args {
    /// Platform name, e.g. production
    #[arg(long)]
    pub name: Option<String>,

    /// Vendor label, e.g. Anthropic
    #[arg(long)]
    pub vendor: Option<String>,

    /// Value for ANTHROPIC_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Value for ANTHROPIC_AUTH_TOKEN
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Value for ANTHROPIC_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Value for ANTHROPIC_SMALL_FAST_MODEL
    #[arg(long)]
    pub small_model: Option<String>,
}

impl Args {
    fn is_complete(&self) -> bool {
        [&self.name, &self.base_url, &self.auth_token, &self.model]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

pub fn run(args: Args, config_path: Option<&Path>) -> Result<()> {
    let mut cfg = config::load(config_path)?;

    let entry = if args.is_complete() {
        from_flags(args)
    } else if std::io::stdin().is_terminal() {
        prompt_missing(args)?
    } else {
        bail!(
            "missing platform fields and stdin is not a terminal\n\
             Pass --name, --base-url, --auth-token and --model to add a platform non-interactively"
        );
    };

    let missing = entry.missing_fields();
    if !missing.is_empty() {
        bail!("platform is missing {}", missing.join(", "));
    }

    let name = entry.name.clone();
    let outcome = cfg.upsert(entry);
    let path = config::save(&cfg, config_path)?;

    match outcome {
        Upsert::Added => output::success(&format!("Platform '{}' added", name)),
        Upsert::Updated => output::warning(&format!("Platform '{}' already existed and was updated", name)),
    }
    output::info(&format!("Saved to {}", path.display()));

    Ok(())
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn from_flags(args: Args) -> PlatformEntry {
    PlatformEntry {
        name: trimmed(args.name).unwrap_or_default(),
        vendor: trimmed(args.vendor),
        base_url: trimmed(args.base_url).unwrap_or_default(),
        auth_token: trimmed(args.auth_token).unwrap_or_default(),
        model: trimmed(args.model).unwrap_or_default(),
        small_model: trimmed(args.small_model),
    }
}

/// Fill every field not given on the command line from interactive input.
fn prompt_missing(args: Args) -> Result<PlatformEntry> {
    let theme = ColorfulTheme::default();
    output::header("Add a platform");
    eprintln!();

    let name = required(&theme, "Platform name (e.g. production, staging)", args.name)?;
    let vendor = optional(&theme, "Vendor (optional)", args.vendor)?;
    let base_url = required(&theme, "ANTHROPIC_BASE_URL", args.base_url)?;
    let auth_token = required(&theme, "ANTHROPIC_AUTH_TOKEN", args.auth_token)?;
    let model = required(&theme, "ANTHROPIC_MODEL", args.model)?;
    let small_model = optional(
        &theme,
        "ANTHROPIC_SMALL_FAST_MODEL (optional, Enter to skip)",
        args.small_model,
    )?;

    Ok(PlatformEntry {
        name,
        vendor,
        base_url,
        auth_token,
        model,
        small_model,
    })
}

fn required(theme: &ColorfulTheme, prompt: &str, given: Option<String>) -> Result<String> {
    if let Some(value) = trimmed(given) {
        return Ok(value);
    }
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .with_context(|| format!("failed to read {}", prompt))?;
    Ok(value.trim().to_string())
}

fn optional(theme: &ColorfulTheme, prompt: &str, given: Option<String>) -> Result<Option<String>> {
    if given.is_some() {
        return Ok(trimmed(given));
    }
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("failed to read {}", prompt))?;
    Ok(trimmed(Some(value)))
}
