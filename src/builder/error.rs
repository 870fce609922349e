//! Build errors for navigators and multi-step forms.

use thiserror::Error;

/// Errors that can occur when building a multi-step form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No steps defined. Add at least one step")]
    NoSteps,

    #[error("Schema not specified. Call .schema(validator) before .build()")]
    MissingSchema,

    #[error("Initial values not specified. Call .initial_values(values) before .build()")]
    MissingInitialValues,

    #[error("Step {step} references field '{field}' which has no initial value")]
    MissingInitialValue { step: usize, field: String },

    #[error("Step {step} lists field '{field}' more than once")]
    DuplicateStepField { step: usize, field: String },
}
