//! Step navigator with a validation gate on forward moves.

use crate::builder::BuildError;
use crate::core::{FieldPath, MoveKind, NavigationHistory, Step, StepMove, StepPosition};
use crate::form::FormEngine;
use crate::navigator::advance::{AdvanceOutcome, AdvanceRequest, NavigationError};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Owns the active step index for one form session.
///
/// Forward moves are two-phase: `begin_advance` hands out a request,
/// the caller validates, and `complete_advance` applies the result. While
/// a request is pending, further `begin_advance` calls are ignored.
/// `advance` runs both phases against a `FormEngine`.
///
/// No timeout is applied to validation. An engine that never answers
/// leaves the navigator pending until the request is completed, cancelled
/// or abandoned. Dropping an `advance` future releases its request.
pub struct Navigator<F: FieldPath, R> {
    steps: Vec<Step<F, R>>,
    position: StepPosition,
    pending: Option<Uuid>,
    history: NavigationHistory,
}

impl<F: FieldPath, R> Navigator<F, R> {
    /// Create a navigator positioned at the first step.
    pub fn new(steps: Vec<Step<F, R>>) -> Result<Self, BuildError> {
        let position = StepPosition::start(steps.len()).ok_or(BuildError::NoSteps)?;

        if let Some((step, field)) = steps
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.duplicate_field().map(|f| (i, f)))
        {
            return Err(BuildError::DuplicateStepField {
                step,
                field: field.path().to_string(),
            });
        }

        Ok(Self {
            steps,
            position,
            pending: None,
            history: NavigationHistory::new(),
        })
    }

    /// The active step (pure)
    pub fn active_step(&self) -> &Step<F, R> {
        &self.steps[self.position.index()]
    }

    pub fn current_step_index(&self) -> usize {
        self.position.index()
    }

    pub fn position(&self) -> StepPosition {
        self.position
    }

    pub fn steps(&self) -> &[Step<F, R>] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first_step(&self) -> bool {
        self.position.is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.position.is_last()
    }

    /// True while an advance request is waiting for its validation result.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Start an advance from the active step.
    ///
    /// Returns `None` if another advance is still pending.
    pub fn begin_advance(&mut self) -> Option<AdvanceRequest<F>> {
        if let Some(ticket) = self.pending {
            debug!(%ticket, "advance ignored, previous request still pending");
            return None;
        }

        let ticket = Uuid::new_v4();
        self.pending = Some(ticket);

        Some(AdvanceRequest {
            ticket,
            from: self.position.index(),
            epoch: self.epoch(),
            fields: self.active_step().fields().to_vec(),
        })
    }

    /// Apply the validation result of the pending request.
    pub fn complete_advance(
        &mut self,
        request: AdvanceRequest<F>,
        passed: bool,
    ) -> Result<AdvanceOutcome, NavigationError> {
        self.take_pending(&request)?;

        if request.epoch != self.epoch() {
            debug!(
                ticket = %request.ticket,
                from = request.from,
                current = self.position.index(),
                "advance superseded"
            );
            return Ok(AdvanceOutcome::Superseded);
        }

        if !passed {
            debug!(ticket = %request.ticket, from = request.from, "advance rejected");
            return Ok(AdvanceOutcome::Rejected);
        }

        let next = self.position.advanced();
        if next == self.position {
            return Ok(AdvanceOutcome::AtLastStep);
        }

        let (from, to) = (self.position.index(), next.index());
        self.move_to(next, MoveKind::Advance);
        Ok(AdvanceOutcome::Advanced { from, to })
    }

    /// Drop the pending request without moving.
    pub fn cancel_advance(&mut self, request: &AdvanceRequest<F>) -> Result<(), NavigationError> {
        self.take_pending(request)?;
        debug!(ticket = %request.ticket, "advance cancelled");
        Ok(())
    }

    /// Forget whatever advance is pending, if any. Returns whether one was.
    ///
    /// For callers that lost their `AdvanceRequest`; a late
    /// `complete_advance` for it is then rejected as stale.
    pub fn abandon_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(ticket) => {
                debug!(%ticket, "pending advance abandoned");
                true
            }
            None => false,
        }
    }

    /// Validate the active step's fields through `engine` and move
    /// forward if they pass.
    ///
    /// Engine errors propagate unchanged and leave the index where it was.
    /// Dropping the returned future before it resolves clears the pending
    /// request, so the next call validates again.
    pub async fn advance<E>(&mut self, engine: &mut E) -> Result<AdvanceOutcome, E::Error>
    where
        E: FormEngine<F>,
    {
        let Some(request) = self.begin_advance() else {
            return Ok(AdvanceOutcome::Ignored);
        };

        let guard = PendingGuard {
            navigator: self,
            ticket: request.ticket,
        };
        let result = engine.trigger(&request.fields).await;

        match result {
            Ok(passed) => match guard.navigator.complete_advance(request, passed) {
                Ok(outcome) => Ok(outcome),
                Err(stale) => unreachable!("pending ticket replaced during advance: {stale}"),
            },
            Err(e) => {
                guard.navigator.pending = None;
                Err(e)
            }
        }
    }

    /// Move back one step without validating. Returns whether the index
    /// changed.
    pub fn retreat(&mut self) -> bool {
        let previous = self.position.retreated();
        if previous == self.position {
            return false;
        }
        self.move_to(previous, MoveKind::Retreat);
        true
    }

    /// Make `index` the active step without validating.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        let target = StepPosition::at(index, self.steps.len()).ok_or(
            NavigationError::OutOfRange {
                index,
                len: self.steps.len(),
            },
        )?;

        if target != self.position {
            self.move_to(target, MoveKind::Jump);
        }
        Ok(())
    }

    fn take_pending(&mut self, request: &AdvanceRequest<F>) -> Result<(), NavigationError> {
        if self.pending != Some(request.ticket) {
            return Err(NavigationError::StaleRequest {
                ticket: request.ticket,
            });
        }
        self.pending = None;
        Ok(())
    }

    /// Number of effective moves so far; changes on every index change,
    /// even one that later returns to the same index.
    fn epoch(&self) -> usize {
        self.history.moves().len()
    }

    fn move_to(&mut self, target: StepPosition, kind: MoveKind) {
        let from = self.position.index();
        debug!(from, to = target.index(), ?kind, "step changed");
        self.history = self.history.record(StepMove {
            from,
            to: target.index(),
            kind,
            timestamp: Utc::now(),
        });
        self.position = target;
    }
}

/// Clears the pending ticket if `advance` is dropped mid-validation.
struct PendingGuard<'a, F: FieldPath, R> {
    navigator: &'a mut Navigator<F, R>,
    ticket: Uuid,
}

impl<F: FieldPath, R> Drop for PendingGuard<'_, F, R> {
    fn drop(&mut self) {
        if self.navigator.pending == Some(self.ticket) {
            debug!(ticket = %self.ticket, "advance dropped before validation finished");
            self.navigator.pending = None;
        }
    }
}
