mod cli;
mod config;
mod error;
mod launcher;
mod platform;
mod select;

use anyhow::Result;
use clap::Parser;

use cli::{output, Cli, Command, LogLevel};
use error::GateError;

fn main() -> Result<()> {
    let Cli {
        config,
        log_level,
        command,
        launch,
    } = Cli::parse();

    init_tracing(log_level);

    let result = match command {
        Some(Command::List(args)) => cli::list::run(args, config.as_deref()),
        Some(Command::Add(args)) => cli::add::run(args, config.as_deref()),
        Some(Command::Delete(args)) => cli::delete::run(args, config.as_deref()),
        None => cli::launch::run(launch, config),
    };

    // Ctrl-C at a prompt is the user's call, not a failure.
    match result {
        Err(e) if matches!(e.downcast_ref::<GateError>(), Some(GateError::UserAborted)) => {
            output::warning("Cancelled");
            Ok(())
        }
        other => other,
    }
}

fn init_tracing(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(level.directive())
        .try_init();
}
