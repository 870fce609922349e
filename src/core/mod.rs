//! Core navigation types and logic.
//!
//! This module contains the pure part of the navigator:
//! - Field paths via the `FieldPath` trait
//! - Steps pairing a renderable with its fields
//! - Clamped index arithmetic
//! - Immutable move history
//! - The value set shared by validators and form engines
//!
//! Nothing in here performs validation or touches form state.

mod field;
mod history;
mod position;
mod step;
mod values;

pub use field::FieldPath;
pub use history::{MoveKind, NavigationHistory, StepMove};
pub use position::StepPosition;
pub use step::Step;
pub use values::FormValues;
