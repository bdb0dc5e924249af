//! Terminal implementations of the selection prompts.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::cli::output;
use crate::config::PlatformEntry;
use crate::error::GateError;
use crate::launcher;
use crate::select::{confirm, ConfirmationResult, Prompter};

/// Rows the picker shows before it starts scrolling.
const PICKER_HEIGHT: usize = 15;

/// Picker via dialoguer, confirmation via single raw-mode keypresses.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn pick(&mut self, platforms: &[PlatformEntry], args: &[String]) -> Result<usize, GateError> {
        if !args.is_empty() {
            output::warning(&format!("Arguments for {}: {}", launcher::DOWNSTREAM, args.join(" ")));
            eprintln!();
        }

        let labels: Vec<String> = platforms.iter().map(PlatformEntry::label).collect();
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a platform (↑↓ to move, Enter to choose)")
            .items(&labels)
            .default(0)
            .max_length(PICKER_HEIGHT)
            .interact_opt()
            .map_err(prompt_error)?;

        // Esc or q closes the picker without a choice.
        let Some(index) = chosen else {
            return Err(GateError::UserAborted);
        };

        if let Some(platform) = platforms.get(index) {
            print_details(platform);
        }
        Ok(index)
    }

    fn confirm(
        &mut self,
        platform: &PlatformEntry,
        args: &[String],
    ) -> Result<ConfirmationResult, GateError> {
        for line in gate_summary(platform, args) {
            output::info(&line);
        }
        eprintln!();
        eprint!("Launch? [Y/n] (Esc to choose again): ");
        io::stderr().flush()?;

        match confirm::read_decision() {
            Ok(answer) => {
                eprintln!("{}", answer.echo());
                Ok(answer)
            }
            Err(e) => {
                eprintln!();
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        let _ = execute!(io::stderr(), Clear(ClearType::All), MoveTo(0, 0));
        output::warning("Cancelled, choose a platform again");
        eprintln!();
    }
}

/// What the confirmation prompt is about to launch.
fn gate_summary(platform: &PlatformEntry, args: &[String]) -> [String; 2] {
    [
        format!("Platform: {}", platform.label().bold()),
        format!("Command: {}", launcher::command_line(args).magenta()),
    ]
}

/// Ctrl-C inside dialoguer surfaces as an interrupted read.
fn prompt_error(err: dialoguer::Error) -> GateError {
    let dialoguer::Error::IO(err) = err;
    if err.kind() == io::ErrorKind::Interrupted {
        GateError::UserAborted
    } else {
        GateError::Io(err)
    }
}

fn print_details(platform: &PlatformEntry) {
    eprintln!();
    output::header("Platform details");
    output::field("Name", &platform.name);
    if let Some(vendor) = platform.vendor() {
        output::field("Vendor", vendor);
    }
    output::field("Base URL", &platform.base_url);
    output::field("Model", &platform.model);
    if let Some(small) = platform.small_model() {
        output::field("Small model", small);
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> PlatformEntry {
        PlatformEntry {
            name: "prod".into(),
            vendor: Some("Anthropic".into()),
            base_url: "https://api.anthropic.com".into(),
            auth_token: "sk-ant-0123456789".into(),
            model: "claude-sonnet-4".into(),
            small_model: None,
        }
    }

    #[test]
    fn gate_names_platform_and_command() {
        let [who, what] = gate_summary(&platform(), &[]);
        assert!(who.starts_with("Platform: "));
        assert!(who.contains("prod (Anthropic)"));
        assert!(what.contains("claude (interactive)"));

        let [_, what] = gate_summary(&platform(), &["--continue".to_string()]);
        assert!(what.contains("claude --continue"));
    }

    #[test]
    fn interrupted_prompt_is_user_abort() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(prompt_error(err), GateError::UserAborted));
    }

    #[test]
    fn other_prompt_failures_stay_io() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::BrokenPipe));
        match prompt_error(err) {
            GateError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected {:?}", other),
        }
    }
}
