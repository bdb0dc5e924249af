pub mod confirm;
pub mod engine;

pub use confirm::ConfirmationResult;
pub use engine::{SelectRequest, SelectionEngine};

use std::io::IsTerminal;

use crate::cli::output;
use crate::config::PlatformEntry;
use crate::error::GateError;

/// Answers whether the session can take interactive input.
pub trait CapabilityProbe {
    fn is_interactive(&self) -> bool;
}

/// Probes stdin on every call.
pub struct TtyProbe;

impl CapabilityProbe for TtyProbe {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}

/// The human side of selection: the platform picker and the confirmation gate.
pub trait Prompter {
    /// Informational line that has no bearing on the decision.
    fn hint(&mut self, message: &str) {
        output::info(message);
    }

    /// Offer every platform and return the index of the chosen one.
    ///
    /// An aborted picker returns [`GateError::UserAborted`].
    fn pick(&mut self, platforms: &[PlatformEntry], args: &[String]) -> Result<usize, GateError>;

    /// Show what is about to run and wait for an answer.
    fn confirm(
        &mut self,
        platform: &PlatformEntry,
        args: &[String],
    ) -> Result<ConfirmationResult, GateError>;

    /// Drop transient output before the picker is shown again.
    fn reset(&mut self) {}
}
