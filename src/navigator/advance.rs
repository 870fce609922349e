//! Advance request/response types.

use crate::core::FieldPath;
use uuid::Uuid;

/// A pending forward move, handed out by `Navigator::begin_advance`.
///
/// The caller validates `fields` and hands the request back to
/// `Navigator::complete_advance` together with the result.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvanceRequest<F: FieldPath> {
    /// Identifies this request; only the pending ticket is accepted back
    pub ticket: Uuid,
    /// Index the advance started from
    pub from: usize,
    /// Move count when the request was issued; any move in between
    /// makes the result stale
    pub epoch: usize,
    /// Fields of the step being left
    pub fields: Vec<F>,
}

/// What an advance attempt did to the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Validation passed and the active step moved forward
    Advanced { from: usize, to: usize },

    /// Validation passed but the last step was already active
    AtLastStep,

    /// Validation failed; the engine's error set explains why
    Rejected,

    /// Another advance was still pending, so this one did nothing
    Ignored,

    /// The active step changed (back or jump) while validation ran,
    /// so the result was discarded
    Superseded,
}

impl AdvanceOutcome {
    /// True only when the active step index changed.
    pub fn moved(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Errors that can occur while navigating
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigationError {
    #[error("Step index {index} is out of range for {len} steps")]
    OutOfRange { index: usize, len: usize },

    #[error("Advance request {ticket} is not the pending request")]
    StaleRequest { ticket: Uuid },
}
