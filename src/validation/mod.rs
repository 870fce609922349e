//! Schema validation for form values.
//!
//! A validator maps the full value set to pass or fail-with-errors. It uses
//! Stillwater's `Validation` type so that every failing field is reported
//! in one pass instead of stopping at the first error. A step only cares
//! about its own fields; scoping the result is the form engine's job.
//!
//! # Example
//!
//! ```rust
//! use formstep::core::FormValues;
//! use formstep::field_enum;
//! use formstep::validation::{failures, Rule, SchemaBuilder, Validator};
//!
//! field_enum! {
//!     enum Field {
//!         Name => "name",
//!         Age => "age",
//!     }
//! }
//!
//! let schema = SchemaBuilder::new()
//!     .rule(Field::Name, Rule::MinLength(2))
//!     .rule(Field::Age, Rule::Min(18.0))
//!     .build();
//!
//! let values = FormValues::new().with(Field::Name, "").with(Field::Age, 3);
//! assert_eq!(failures(schema.validate(&values)).len(), 2);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::SchemaBuilder;
pub use rules::{Rule, Schema};
pub use violations::FieldError;

use crate::core::{FieldPath, FormValues};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Capability mapping a value set to success or field-keyed errors.
///
/// Implementations must be pure: the same values yield the same result.
pub trait Validator<F: FieldPath>: Send + Sync {
    fn validate(&self, values: &FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>>;
}

impl<F: FieldPath, V: Validator<F> + ?Sized> Validator<F> for Arc<V> {
    fn validate(&self, values: &FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> {
        (**self).validate(values)
    }
}

impl<F: FieldPath, V: Validator<F> + ?Sized> Validator<F> for Box<V> {
    fn validate(&self, values: &FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> {
        (**self).validate(values)
    }
}

/// Flatten a validation result into its failures (empty on success).
pub fn failures<F: FieldPath>(
    result: Validation<(), NonEmptyVec<FieldError<F>>>,
) -> Vec<FieldError<F>> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
