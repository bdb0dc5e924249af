use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::cli::args::{restore_separator, split_passthrough};
use crate::cli::prompt::TerminalPrompter;
use crate::config;
use crate::launcher;
use crate::select::{SelectRequest, SelectionEngine, TtyProbe};

/// Flags of the bare `ccgate [..] [CLAUDE_ARGS..]` invocation.
#[derive(ClapArgs)]
pub struct Args {
    /// Platform to use, skipping the picker
    #[arg(long, short)]
    pub platform: Option<String>,

    /// Launch without asking for confirmation
    #[arg(long, short)]
    pub yes: bool,

    /// Print the environment and command instead of launching
    #[arg(long)]
    pub dry_run: bool,

    /// Arguments passed through to claude
    #[arg(
        value_name = "CLAUDE_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub claude_args: Vec<String>,
}

pub fn run(args: Args, config_path: Option<PathBuf>) -> Result<()> {
    let raw: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let passthrough = restore_separator(&raw, args.claude_args);
    let (late, claude_args) = split_passthrough(&passthrough);

    let config_path = late.config.or(config_path);
    let request = SelectRequest {
        platform: late.platform.or(args.platform),
        args: claude_args,
        skip_confirm: args.yes || late.yes,
    };
    let dry_run = args.dry_run || late.dry_run;

    let cfg = config::load(config_path.as_deref())?;

    let mut engine = SelectionEngine::new(TerminalPrompter, TtyProbe);
    let selection = engine.resolve(&cfg.platforms, &request)?;
    tracing::info!("selected '{}' ({:?})", selection.platform.name, selection.via);

    if dry_run {
        print!("{}", launcher::render_dry_run(selection.platform, &request.args));
        return Ok(());
    }

    launcher::exec(selection.platform, &request.args)
}
