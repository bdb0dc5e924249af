pub mod add;
pub mod args;
pub mod delete;
pub mod launch;
pub mod list;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Pick a Claude platform and launch claude against it
#[derive(Parser)]
#[command(
    name = "ccgate",
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  ccgate list\n  ccgate add\n  ccgate -p prod --continue\n  ccgate chat \"hello\""
)]
pub struct Cli {
    /// Platforms file (default: ~/.ccgate/config.json)
    #[arg(long, short = 'f', global = true, env = "CCGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging verbosity for stderr
    #[arg(long, global = true, env = "CCGATE_LOG", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub launch: launch::Args,
}

#[derive(Subcommand)]
pub enum Command {
    /// List configured platforms
    List(list::Args),

    /// Add a platform, or update the one with the same name
    Add(add::Args),

    /// Delete a platform by name
    Delete(delete::Args),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["ccgate", "list"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn log_level_accepts_known_values_anywhere() {
        let cli = Cli::try_parse_from(["ccgate", "list", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.directive(), "debug");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["ccgate", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn passthrough_keeps_hyphenated_args() {
        let cli = Cli::try_parse_from(["ccgate", "-p", "prod", "--continue"]).unwrap();
        assert_eq!(cli.launch.platform.as_deref(), Some("prod"));
        assert_eq!(cli.launch.claude_args, ["--continue"]);
    }
}
