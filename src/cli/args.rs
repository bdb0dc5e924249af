//! Separating ccgate's own flags from the arguments meant for `claude`.
//!
//! clap stops at the first passthrough token, so launcher flags written after
//! it (`ccgate chat -p prod`) arrive here mixed in with `claude`'s arguments.

use std::path::PathBuf;

/// Launcher flags recovered from the passthrough tail.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LateFlags {
    pub platform: Option<String>,
    pub config: Option<PathBuf>,
    pub yes: bool,
    pub dry_run: bool,
}

/// Put back the `--` that clap swallows when it precedes every passthrough
/// token, so [`split_passthrough`] still sees where flag recognition ends.
///
/// `raw` is the full command line without the program name and `parsed` is
/// what clap collected as passthrough arguments.
pub fn restore_separator(raw: &[String], mut parsed: Vec<String>) -> Vec<String> {
    let Some(pos) = raw.iter().position(|t| t == "--") else {
        return parsed;
    };
    let tail = &raw[pos + 1..];
    if parsed.len() < tail.len() || !parsed.ends_with(tail) {
        return parsed;
    }

    let at = parsed.len() - tail.len();
    if at > 0 && parsed[at - 1] == "--" {
        return parsed;
    }
    parsed.insert(at, "--".to_string());
    parsed
}

/// Split `tokens` into launcher flags and the arguments forwarded to `claude`.
///
/// Recognised: `-p/--platform NAME`, `--platform=NAME`, `-f/--config PATH`,
/// `--config=PATH`, `-y/--yes` and `--dry-run`. A bare `--` ends flag
/// recognition; it is dropped and everything after it is forwarded verbatim.
/// A value-taking flag with nothing after it is forwarded unchanged.
pub fn split_passthrough(tokens: &[String]) -> (LateFlags, Vec<String>) {
    let mut flags = LateFlags::default();
    let mut forward = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token.as_str() {
            "--" => {
                forward.extend(iter.by_ref().cloned());
                break;
            }
            "-y" | "--yes" => flags.yes = true,
            "--dry-run" => flags.dry_run = true,
            "-p" | "--platform" if iter.peek().is_some() => {
                flags.platform = iter.next().cloned();
            }
            "-f" | "--config" if iter.peek().is_some() => {
                flags.config = iter.next().map(PathBuf::from);
            }
            other => {
                if let Some(name) = other.strip_prefix("--platform=") {
                    flags.platform = Some(name.to_string());
                } else if let Some(path) = other.strip_prefix("--config=") {
                    flags.config = Some(PathBuf::from(path));
                } else {
                    forward.push(token.clone());
                }
            }
        }
    }

    (flags, forward)
}
