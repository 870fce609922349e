//! Form-state engines.
//!
//! The navigator never owns field values or errors. It talks to a
//! `FormEngine`, which holds both and runs partial validation on request.
//! `FormState` is the in-memory engine shipped with the crate; callers with
//! their own state layer implement `FormEngine` instead.

mod engine;
mod errors;
mod state;

pub use engine::{FormEngine, SubmitOutcome};
pub use errors::ErrorSet;
pub use state::{FormError, FormState};
