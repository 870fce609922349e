//! Step navigation history.
//!
//! Records every move that actually changed the active step. Boundary
//! no-ops and rejected advances leave no trace. The log is immutable:
//! `record` returns a new history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the active step was changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Validated forward move
    Advance,
    /// Unconditional backward move
    Retreat,
    /// Direct index override
    Jump,
}

/// Record of a single change of the active step index.
///
/// # Example
///
/// ```rust
/// use formstep::core::{MoveKind, StepMove};
/// use chrono::Utc;
///
/// let step_move = StepMove {
///     from: 0,
///     to: 1,
///     kind: MoveKind::Advance,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step_move.to, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepMove {
    /// Index before the move
    pub from: usize,
    /// Index after the move
    pub to: usize,
    pub kind: MoveKind,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of step moves.
///
/// # Example
///
/// ```rust
/// use formstep::core::{MoveKind, NavigationHistory, StepMove};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new()
///     .record(StepMove { from: 0, to: 1, kind: MoveKind::Advance, timestamp: Utc::now() })
///     .record(StepMove { from: 1, to: 0, kind: MoveKind::Retreat, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![0, 1, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    moves: Vec<StepMove>,
}

impl NavigationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Record a move, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, step_move: StepMove) -> Self {
        let mut moves = self.moves.clone();
        moves.push(step_move);
        Self { moves }
    }

    /// Indices visited in order: the origin of the first move, then the
    /// target of every move. Empty when nothing has moved.
    pub fn get_path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.moves.len() + 1);
        if let Some(first) = self.moves.first() {
            path.push(first.from);
        }
        path.extend(self.moves.iter().map(|m| m.to));
        path
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` if there are no moves.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.moves.first()?, self.moves.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of moves of the given kind.
    pub fn count(&self, kind: MoveKind) -> usize {
        self.moves.iter().filter(|m| m.kind == kind).count()
    }

    pub fn moves(&self) -> &[StepMove] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_move(from: usize, to: usize, kind: MoveKind) -> StepMove {
        StepMove {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = NavigationHistory::new();
        assert!(history.moves().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = NavigationHistory::new();
        let new_history = history.record(step_move(0, 1, MoveKind::Advance));

        assert_eq!(history.moves().len(), 0);
        assert_eq!(new_history.moves().len(), 1);
    }

    #[test]
    fn get_path_returns_index_sequence() {
        let history = NavigationHistory::new()
            .record(step_move(0, 1, MoveKind::Advance))
            .record(step_move(1, 2, MoveKind::Advance))
            .record(step_move(2, 0, MoveKind::Jump));

        assert_eq!(history.get_path(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn count_filters_by_kind() {
        let history = NavigationHistory::new()
            .record(step_move(0, 1, MoveKind::Advance))
            .record(step_move(1, 0, MoveKind::Retreat))
            .record(step_move(0, 1, MoveKind::Advance));

        assert_eq!(history.count(MoveKind::Advance), 2);
        assert_eq!(history.count(MoveKind::Retreat), 1);
        assert_eq!(history.count(MoveKind::Jump), 0);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = NavigationHistory::new().record(StepMove {
            from: 0,
            to: 1,
            kind: MoveKind::Advance,
            timestamp: start,
        });

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(step_move(1, 2, MoveKind::Advance));

        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_move_has_duration_zero() {
        let history = NavigationHistory::new().record(step_move(0, 1, MoveKind::Jump));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = NavigationHistory::new().record(step_move(0, 1, MoveKind::Advance));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: NavigationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
