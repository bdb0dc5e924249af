use tracing::debug;

use super::{CapabilityProbe, ConfirmationResult, Prompter};
use crate::config::PlatformEntry;
use crate::error::GateError;
use crate::platform::{find_by_name, suggest_names};

/// Everything one launch asks of the selection engine.
#[derive(Debug, Clone, Default)]
pub struct SelectRequest {
    /// Platform named with `-p`; an empty string counts as none.
    pub platform: Option<String>,
    /// Arguments destined for `claude`. Only shown to the user here.
    pub args: Vec<String>,
    /// `--yes`: never stop at the confirmation gate.
    pub skip_confirm: bool,
}

impl SelectRequest {
    fn explicit_name(&self) -> Option<&str> {
        self.platform.as_deref().filter(|name| !name.is_empty())
    }
}

/// How the platform came to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedBy {
    /// Named on the command line.
    Explicit,
    /// The only configured platform.
    OnlyOne,
    /// Chosen in the picker; `confirmed` is false when `--yes` skipped the gate.
    Picked { confirmed: bool },
}

/// A platform borrowed from the caller's set, plus how it was reached.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub platform: &'a PlatformEntry,
    pub via: SelectedBy,
}

impl Selection<'_> {
    /// Explicit and auto selections have not been through the gate yet.
    pub fn needs_confirmation(&self) -> bool {
        matches!(self.via, SelectedBy::Explicit | SelectedBy::OnlyOne)
    }
}

pub struct SelectionEngine<P, C> {
    prompter: P,
    probe: C,
}

impl<P: Prompter, C: CapabilityProbe> SelectionEngine<P, C> {
    pub fn new(prompter: P, probe: C) -> Self {
        Self { prompter, probe }
    }

    /// Choose one platform from `platforms`.
    ///
    /// Priority: empty set, explicit name, single platform, non-interactive
    /// refusal, then the interactive pick/confirm loop. Explicit and single
    /// selections are returned unconfirmed; see [`Self::resolve`].
    pub fn select<'a>(
        &mut self,
        platforms: &'a [PlatformEntry],
        request: &SelectRequest,
    ) -> Result<Selection<'a>, GateError> {
        if platforms.is_empty() {
            return Err(GateError::NoPlatformsConfigured);
        }

        if let Some(name) = request.explicit_name() {
            debug!("looking up explicit platform '{}'", name);
            return match find_by_name(platforms, name) {
                Some(platform) => Ok(Selection {
                    platform,
                    via: SelectedBy::Explicit,
                }),
                None => Err(GateError::PlatformNotFound {
                    name: name.to_string(),
                    suggestions: suggest_names(platforms, name),
                }),
            };
        }

        if let [platform] = platforms {
            debug!("single platform '{}', selecting it", platform.name);
            if !request.args.is_empty() {
                self.prompter.hint(&format!(
                    "Only one platform configured, using '{}'",
                    platform.name
                ));
            }
            return Ok(Selection {
                platform,
                via: SelectedBy::OnlyOne,
            });
        }

        if !self.probe.is_interactive() {
            debug!("{} platforms and no terminal, refusing to guess", platforms.len());
            return Err(GateError::InteractionRequired {
                platform_names: platforms.iter().map(|p| p.name.clone()).collect(),
                args: request.args.clone(),
            });
        }

        self.pick_until_confirmed(platforms, request)
    }

    /// [`Self::select`], then the confirmation gate for selections that have
    /// not passed it. Without a terminal that gate is skipped.
    pub fn resolve<'a>(
        &mut self,
        platforms: &'a [PlatformEntry],
        request: &SelectRequest,
    ) -> Result<Selection<'a>, GateError> {
        let selection = self.select(platforms, request)?;

        if request.skip_confirm || !selection.needs_confirmation() {
            return Ok(selection);
        }
        if !self.probe.is_interactive() {
            debug!("no terminal, launching '{}' unconfirmed", selection.platform.name);
            return Ok(selection);
        }

        // No picker to go back to here, so Esc is a plain cancel.
        match self.prompter.confirm(selection.platform, &request.args)? {
            ConfirmationResult::Confirmed => Ok(selection),
            ConfirmationResult::Cancelled | ConfirmationResult::ReselectRequested => {
                Err(GateError::SelectionCancelled)
            }
        }
    }

    fn pick_until_confirmed<'a>(
        &mut self,
        platforms: &'a [PlatformEntry],
        request: &SelectRequest,
    ) -> Result<Selection<'a>, GateError> {
        loop {
            let index = self.prompter.pick(platforms, &request.args)?;
            let platform = platforms.get(index).ok_or_else(|| {
                GateError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("picker returned index {} of {}", index, platforms.len()),
                ))
            })?;
            debug!("picked '{}'", platform.name);

            if request.skip_confirm {
                return Ok(Selection {
                    platform,
                    via: SelectedBy::Picked { confirmed: false },
                });
            }

            match self.prompter.confirm(platform, &request.args)? {
                ConfirmationResult::Confirmed => {
                    return Ok(Selection {
                        platform,
                        via: SelectedBy::Picked { confirmed: true },
                    })
                }
                ConfirmationResult::ReselectRequested => {
                    debug!("reselect requested after '{}'", platform.name);
                    self.prompter.reset();
                }
                ConfirmationResult::Cancelled => return Err(GateError::SelectionCancelled),
            }
        }
    }
}
