pub mod schema;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::output;

pub use schema::{ConfigMessage, GateConfig, PlatformEntry, Upsert};

/// Load the platforms file at `path` (or the default location) and validate it.
///
/// A missing file yields an empty configuration. Validation warnings are
/// printed to stderr; validation errors fail the load.
pub fn load(path: Option<&Path>) -> Result<GateConfig> {
    let config_path = resolve_path(path);

    let contents = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, starting empty", config_path.display());
            return Ok(GateConfig::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read {}", config_path.display()))
        }
    };

    let file: schema::ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("invalid JSON in {}", config_path.display()))?;
    let config = GateConfig::from(file);

    let (errors, warnings): (Vec<_>, Vec<_>) =
        config.validate().into_iter().partition(ConfigMessage::is_error);
    for warning in &warnings {
        output::warning(&format!("config warning: {}", warning.text()));
    }
    if !errors.is_empty() {
        let listed: Vec<&str> = errors.iter().map(ConfigMessage::text).collect();
        anyhow::bail!(
            "invalid platforms in {}:\n  - {}",
            config_path.display(),
            listed.join("\n  - ")
        );
    }

    tracing::debug!(
        "loaded {} platform(s) from {}",
        config.platforms.len(),
        config_path.display()
    );
    Ok(config)
}

/// Write `config` as pretty JSON, creating the parent directory if needed.
pub fn save(config: &GateConfig, path: Option<&Path>) -> Result<PathBuf> {
    let config_path = resolve_path(path);

    if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&config_path, json + "\n")
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    Ok(config_path)
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) => p.to_path_buf(),
        None => default_path(),
    }
}

/// `~/.ccgate/config.json`, or `platforms.json` in the working directory when
/// no home directory can be determined.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".ccgate").join("config.json"))
        .unwrap_or_else(|| PathBuf::from("platforms.json"))
}
