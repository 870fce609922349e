//! Formstep: step navigation for multi-step forms
//!
//! Formstep tracks which step of a form is active and only lets the user
//! move forward once the fields belonging to that step validate. Moving
//! back never validates. Values, errors and submit handling stay with a
//! form engine; the navigator only asks it to validate.
//!
//! # Core Concepts
//!
//! - **Field paths**: a closed enum implementing `FieldPath` (see `field_enum!`)
//! - **Steps**: an opaque renderable plus the fields it is responsible for
//! - **Validator**: maps the whole value set to pass or field-keyed errors
//! - **Form engine**: owns values and errors, runs partial validation
//! - **Navigator**: owns the step index and gates forward moves
//!
//! # Example
//!
//! ```rust
//! use formstep::builder::MultiStepFormBuilder;
//! use formstep::core::FormValues;
//! use formstep::field_enum;
//! use formstep::navigator::AdvanceOutcome;
//! use formstep::validation::{Rule, SchemaBuilder};
//!
//! field_enum! {
//!     enum Field {
//!         Name => "name",
//!         Age => "age",
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut form = MultiStepFormBuilder::new()
//!     .step("who", vec![Field::Name])
//!     .step("age", vec![Field::Age])
//!     .schema(SchemaBuilder::new().rule(Field::Name, Rule::MinLength(2)).build())
//!     .initial_values(FormValues::new().with(Field::Name, "").with(Field::Age, 0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(form.next().await.unwrap(), AdvanceOutcome::Rejected);
//!
//! form.form_mut().set_value(Field::Name, "Al").unwrap();
//! assert_eq!(
//!     form.next().await.unwrap(),
//!     AdvanceOutcome::Advanced { from: 0, to: 1 }
//! );
//! assert!(form.is_last_step());
//! # });
//! ```

pub mod builder;
pub mod core;
pub mod form;
pub mod multistep;
pub mod navigator;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, MultiStepFormBuilder};
pub use crate::core::{FieldPath, FormValues, Step};
pub use form::{FormEngine, FormState};
pub use multistep::{FormSnapshot, MultiStepForm};
pub use navigator::{AdvanceOutcome, NavigationError, Navigator};
pub use validation::{Rule, Schema, SchemaBuilder, Validator};
