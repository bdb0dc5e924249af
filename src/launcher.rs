//! Hand the chosen platform to `claude` by replacing this process.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::output;
use crate::config::PlatformEntry;

/// The program every launch ends in.
pub const DOWNSTREAM: &str = "claude";

pub const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const ENV_AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
pub const ENV_MODEL: &str = "ANTHROPIC_MODEL";
pub const ENV_SMALL_MODEL: &str = "ANTHROPIC_SMALL_FAST_MODEL";

/// Variables injected for `platform`. The small model is only set when present.
pub fn environment(platform: &PlatformEntry) -> Vec<(&'static str, String)> {
    let mut env = vec![
        (ENV_BASE_URL, platform.base_url.clone()),
        (ENV_AUTH_TOKEN, platform.auth_token.clone()),
        (ENV_MODEL, platform.model.clone()),
    ];
    if let Some(small) = platform.small_model() {
        env.push((ENV_SMALL_MODEL, small.to_string()));
    }
    env
}

/// Hide all but the edges of a secret: `sk-a****wxyz`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}

/// The command line as shown to the user.
pub fn command_line(args: &[String]) -> String {
    if args.is_empty() {
        format!("{} (interactive)", DOWNSTREAM)
    } else {
        format!("{} {}", DOWNSTREAM, args.join(" "))
    }
}

/// What a launch would do, with the token masked.
pub fn render_dry_run(platform: &PlatformEntry, args: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("platform: {}\n", platform.name));
    if let Some(vendor) = platform.vendor() {
        out.push_str(&format!("vendor: {}\n", vendor));
    }
    out.push_str("environment:\n");
    for (key, value) in environment(platform) {
        let shown = if key == ENV_AUTH_TOKEN {
            mask_token(&value)
        } else {
            value
        };
        out.push_str(&format!("  {}={}\n", key, shown));
    }
    out.push_str(&format!("command: {}\n", command_line(args)));
    out
}

/// Set the platform's environment and exec `claude` with `args`.
///
/// On Unix this only returns if the exec itself fails. Elsewhere the child
/// runs to completion and its exit status becomes ours.
pub fn exec(platform: &PlatformEntry, args: &[String]) -> Result<()> {
    let program = which::which(DOWNSTREAM).with_context(|| {
        format!(
            "could not find `{}` on PATH\n\
             Install Claude Code first: https://docs.anthropic.com/en/docs/claude-code",
            DOWNSTREAM
        )
    })?;
    tracing::debug!("resolved {} to {}", DOWNSTREAM, program.display());

    eprintln!();
    output::success("Environment ready");
    output::info(&format!("Platform: {}", platform.name.bold()));
    output::info(&format!("Running: {}", command_line(args).magenta()));

    let mut cmd = std::process::Command::new(&program);
    cmd.args(args).envs(environment(platform));
    replace_process(cmd, &program)
}

#[cfg(unix)]
fn replace_process(mut cmd: std::process::Command, program: &Path) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // exec() only returns on failure.
    let err = cmd.arg0(DOWNSTREAM).exec();
    Err(err).with_context(|| format!("failed to exec {}", program.display()))
}

#[cfg(not(unix))]
fn replace_process(mut cmd: std::process::Command, program: &Path) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to run {}", program.display()))?;
    std::process::exit(status.code().unwrap_or(1));
}
