//! The capability object handed to a rendering layer.

use crate::core::{FieldPath, NavigationHistory, Step};
use crate::form::{ErrorSet, FormEngine, SubmitOutcome};
use crate::navigator::{AdvanceOutcome, NavigationError, Navigator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One multi-step form session: a navigator plus the form engine it gates
/// on.
///
/// Build it with [`MultiStepFormBuilder`](crate::builder::MultiStepFormBuilder).
/// Each build yields an independent session; nothing is shared between
/// instances.
///
/// # Example
///
/// ```rust
/// use formstep::builder::MultiStepFormBuilder;
/// use formstep::core::FormValues;
/// use formstep::field_enum;
/// use formstep::validation::{Rule, SchemaBuilder};
///
/// field_enum! {
///     enum Field {
///         Name => "name",
///         Age => "age",
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut form = MultiStepFormBuilder::new()
///     .step("profile", vec![Field::Name])
///     .step("details", vec![Field::Age])
///     .schema(SchemaBuilder::new().rule(Field::Name, Rule::MinLength(2)).build())
///     .initial_values(FormValues::new().with(Field::Name, "").with(Field::Age, 0))
///     .build()
///     .unwrap();
///
/// form.next().await.unwrap();
/// assert_eq!(form.current_step_index(), 0);
/// assert!(form.errors().has(&Field::Name));
///
/// form.form_mut().set_value(Field::Name, "Al").unwrap();
/// form.next().await.unwrap();
/// assert!(form.is_last_step());
/// # });
/// ```
pub struct MultiStepForm<F: FieldPath, R, E: FormEngine<F>> {
    navigator: Navigator<F, R>,
    engine: E,
}

/// Serializable read-only view of a session for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub step_index: usize,
    pub step_count: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
    /// An advance is waiting on validation
    pub pending: bool,
    /// Paths of the active step's fields
    pub fields: Vec<String>,
    /// Current messages by field path
    pub errors: BTreeMap<String, Vec<String>>,
}

impl<F: FieldPath, R, E: FormEngine<F>> MultiStepForm<F, R, E> {
    pub(crate) fn from_parts(navigator: Navigator<F, R>, engine: E) -> Self {
        Self { navigator, engine }
    }

    /// The active step: its renderable and fields
    pub fn step(&self) -> &Step<F, R> {
        self.navigator.active_step()
    }

    pub fn current_step_index(&self) -> usize {
        self.navigator.current_step_index()
    }

    /// Jump straight to `index` without validating.
    pub fn set_current_step_index(&mut self, index: usize) -> Result<(), NavigationError> {
        self.navigator.jump_to(index)
    }

    /// Validate the active step and move forward if it passes.
    ///
    /// A failed validation is not an error: the index stays put and the
    /// engine's error set says why.
    pub async fn next(&mut self) -> Result<AdvanceOutcome, E::Error> {
        self.navigator.advance(&mut self.engine).await
    }

    /// Move back one step. Never validates.
    pub fn back(&mut self) -> bool {
        self.navigator.retreat()
    }

    pub fn is_first_step(&self) -> bool {
        self.navigator.is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last_step()
    }

    /// Submit through the engine. Usually called on the last step.
    pub async fn handle_submit<T, H>(&mut self, handler: H) -> Result<SubmitOutcome<T>, E::Error>
    where
        T: Send + 'static,
        H: FnOnce(&crate::core::FormValues<F>) -> T + Send + 'static,
    {
        self.engine.handle_submit(handler).await
    }

    /// Field-binding capability
    pub fn form(&self) -> &E {
        &self.engine
    }

    pub fn form_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn errors(&self) -> &ErrorSet<F> {
        self.engine.errors()
    }

    pub fn steps(&self) -> &[Step<F, R>] {
        self.navigator.steps()
    }

    pub fn step_count(&self) -> usize {
        self.navigator.step_count()
    }

    pub fn history(&self) -> &NavigationHistory {
        self.navigator.history()
    }

    pub fn navigator(&self) -> &Navigator<F, R> {
        &self.navigator
    }

    /// For callers that drive `begin_advance` / `complete_advance` themselves.
    pub fn navigator_mut(&mut self) -> &mut Navigator<F, R> {
        &mut self.navigator
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            step_index: self.current_step_index(),
            step_count: self.step_count(),
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
            pending: self.navigator.is_pending(),
            fields: self
                .step()
                .fields()
                .iter()
                .map(|f| f.path().to_string())
                .collect(),
            errors: self.errors().by_path(),
        }
    }

    pub fn into_parts(self) -> (Navigator<F, R>, E) {
        (self.navigator, self.engine)
    }
}
