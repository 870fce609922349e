//! Builder API for ergonomic multi-step form construction.
//!
//! This module provides fluent builders and macros for creating forms with
//! minimal boilerplate. Construction fails fast on configurations that
//! would otherwise break at navigation time: no steps, a step field with no
//! initial value, a field listed twice in one step.

pub mod error;
pub mod form;
pub mod macros;

pub use error::BuildError;
pub use form::{DefaultEngine, MultiStepFormBuilder};
