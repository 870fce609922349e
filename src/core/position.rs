//! Pure index arithmetic for the step sequence.
//!
//! `StepPosition` never mutates; every move returns a new position. Moves
//! past either boundary clamp, so repeating them is idempotent.

use serde::Serialize;

/// Position of the active step within a sequence of `len` steps.
///
/// Invariant: `index < len` and `len >= 1`.
///
/// # Example
///
/// ```rust
/// use formstep::core::StepPosition;
///
/// let pos = StepPosition::start(3).unwrap();
/// assert!(pos.is_first());
///
/// let last = pos.advanced().advanced().advanced();
/// assert_eq!(last.index(), 2);
/// assert!(last.is_last());
/// assert_eq!(last.retreated().index(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepPosition {
    index: usize,
    len: usize,
}

impl StepPosition {
    /// Position at the first step. Returns `None` for an empty sequence.
    pub fn start(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    /// Position at `index`. Returns `None` if `index` is out of range.
    pub fn at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.len - 1
    }

    /// Next position, clamped at the last step.
    pub fn advanced(&self) -> Self {
        Self {
            index: (self.index + 1).min(self.len - 1),
            len: self.len,
        }
    }

    /// Previous position, clamped at the first step.
    pub fn retreated(&self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_rejects_empty_sequence() {
        assert!(StepPosition::start(0).is_none());
        assert_eq!(StepPosition::start(1).unwrap().index(), 0);
    }

    #[test]
    fn at_rejects_out_of_range() {
        assert!(StepPosition::at(3, 3).is_none());
        assert_eq!(StepPosition::at(2, 3).unwrap().index(), 2);
    }

    #[test]
    fn advanced_clamps_at_last() {
        let last = StepPosition::at(2, 3).unwrap();
        assert_eq!(last.advanced(), last);
    }

    #[test]
    fn retreated_clamps_at_first() {
        let first = StepPosition::start(3).unwrap();
        assert_eq!(first.retreated(), first);
    }

    #[test]
    fn single_step_is_first_and_last() {
        let only = StepPosition::start(1).unwrap();
        assert!(only.is_first());
        assert!(only.is_last());
    }

    #[test]
    fn interior_is_neither_first_nor_last() {
        let mid = StepPosition::at(1, 3).unwrap();
        assert!(!mid.is_first());
        assert!(!mid.is_last());
    }

    #[test]
    fn moves_do_not_mutate_original() {
        let pos = StepPosition::at(1, 3).unwrap();
        let _ = pos.advanced();
        let _ = pos.retreated();
        assert_eq!(pos.index(), 1);
    }
}
