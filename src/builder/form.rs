//! Builder for constructing multi-step forms.

use crate::builder::error::BuildError;
use crate::core::{FieldPath, FormValues, Step};
use crate::form::{FormEngine, FormState};
use crate::multistep::MultiStepForm;
use crate::navigator::Navigator;
use crate::validation::Validator;
use serde_json::Value;

/// Engine produced by [`MultiStepFormBuilder::build`].
pub type DefaultEngine<F> = FormState<F, Box<dyn Validator<F>>>;

/// Builder for multi-step forms with a fluent API.
pub struct MultiStepFormBuilder<F: FieldPath, R> {
    steps: Vec<Step<F, R>>,
    schema: Option<Box<dyn Validator<F>>>,
    initial_values: Option<FormValues<F>>,
}

impl<F: FieldPath + 'static, R> MultiStepFormBuilder<F, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            schema: None,
            initial_values: None,
        }
    }

    /// Append a step built from a renderable and its fields.
    pub fn step(mut self, renderable: R, fields: Vec<F>) -> Self {
        self.steps.push(Step::new(renderable, fields));
        self
    }

    /// Append a pre-built step.
    pub fn add_step(mut self, step: Step<F, R>) -> Self {
        self.steps.push(step);
        self
    }

    /// Append multiple steps at once.
    pub fn steps(mut self, steps: Vec<Step<F, R>>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Set the validator (required for `build`).
    pub fn schema<V>(mut self, validator: V) -> Self
    where
        V: Validator<F> + 'static,
    {
        self.schema = Some(Box::new(validator));
        self
    }

    /// Set all initial values (required for `build`).
    pub fn initial_values(mut self, values: FormValues<F>) -> Self {
        self.initial_values = Some(values);
        self
    }

    /// Set one initial value, starting an empty value set if needed.
    pub fn initial_value(mut self, field: F, value: impl Into<Value>) -> Self {
        self.initial_values
            .get_or_insert_with(FormValues::new)
            .insert(field, value.into());
        self
    }

    /// Build a form backed by the in-memory `FormState` engine.
    pub fn build(mut self) -> Result<MultiStepForm<F, R, DefaultEngine<F>>, BuildError> {
        let schema = self.schema.take().ok_or(BuildError::MissingSchema)?;
        let values = self
            .initial_values
            .take()
            .ok_or(BuildError::MissingInitialValues)?;

        self.build_with(FormState::new(schema, values))
    }

    /// Build a form around a caller-supplied engine.
    ///
    /// The schema and initial values set on this builder are not used; the
    /// engine's current values must cover every step field.
    pub fn build_with<E>(self, engine: E) -> Result<MultiStepForm<F, R, E>, BuildError>
    where
        E: FormEngine<F>,
    {
        let navigator = Navigator::new(self.steps)?;
        check_coverage(navigator.steps(), engine.values())?;
        Ok(MultiStepForm::from_parts(navigator, engine))
    }
}

impl<F: FieldPath + 'static, R> Default for MultiStepFormBuilder<F, R> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_coverage<F: FieldPath, R>(
    steps: &[Step<F, R>],
    values: &FormValues<F>,
) -> Result<(), BuildError> {
    for (index, step) in steps.iter().enumerate() {
        if let Some(missing) = step.fields().iter().find(|f| !values.contains(f)) {
            return Err(BuildError::MissingInitialValue {
                step: index,
                field: missing.path().to_string(),
            });
        }
    }
    Ok(())
}
