//! In-memory form-state engine backed by a `Validator`.

use crate::core::{FieldPath, FormValues};
use crate::form::engine::{FormEngine, SubmitOutcome};
use crate::form::errors::ErrorSet;
use crate::validation::{failures, Validator};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised by `FormState` itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Field '{path}' is not registered. Give it an initial value")]
    UnknownField { path: String },
}

/// Reference form engine: registered fields, defaults, dirty/touched
/// tracking, an error set, and submit handling.
///
/// # Example
///
/// ```rust
/// use formstep::core::FormValues;
/// use formstep::field_enum;
/// use formstep::form::{FormEngine, FormState};
/// use formstep::validation::{Rule, SchemaBuilder};
///
/// field_enum! {
///     enum Field {
///         Name => "name",
///     }
/// }
///
/// # tokio_test_block(async {
/// let schema = SchemaBuilder::new().rule(Field::Name, Rule::MinLength(2)).build();
/// let mut form = FormState::new(schema, FormValues::new().with(Field::Name, ""));
///
/// assert!(!form.trigger(&[Field::Name]).await.unwrap());
/// assert!(form.errors().has(&Field::Name));
///
/// form.set_value(Field::Name, "Al").unwrap();
/// assert!(form.trigger(&[Field::Name]).await.unwrap());
/// assert!(form.is_dirty(&Field::Name));
/// # });
/// # fn tokio_test_block<Fut: std::future::Future>(fut: Fut) -> Fut::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(fut)
/// # }
/// ```
pub struct FormState<F: FieldPath, V: Validator<F>> {
    validator: V,
    defaults: FormValues<F>,
    values: FormValues<F>,
    errors: ErrorSet<F>,
    touched: HashSet<F>,
    submit_count: usize,
}

impl<F: FieldPath, V: Validator<F>> FormState<F, V> {
    /// Create an engine whose fields are exactly the keys of `defaults`.
    pub fn new(validator: V, defaults: FormValues<F>) -> Self {
        Self {
            validator,
            values: defaults.clone(),
            defaults,
            errors: ErrorSet::new(),
            touched: HashSet::new(),
            submit_count: 0,
        }
    }

    /// Register a field with a default value. An already registered field
    /// keeps its current value but gets the new default.
    pub fn register(&mut self, field: F, default: impl Into<Value>) {
        let default = default.into();
        if !self.values.contains(&field) {
            self.values.insert(field.clone(), default.clone());
        }
        self.defaults.insert(field, default);
    }

    pub fn is_registered(&self, field: &F) -> bool {
        self.values.contains(field)
    }

    pub fn value(&self, field: &F) -> Option<&Value> {
        self.values.get(field)
    }

    /// Set a field value and mark it touched.
    pub fn set_value(&mut self, field: F, value: impl Into<Value>) -> Result<(), FormError> {
        self.ensure_registered(std::slice::from_ref(&field))?;
        self.values.insert(field.clone(), value.into());
        self.touched.insert(field);
        Ok(())
    }

    /// Mark a field touched without changing it (e.g. on blur).
    pub fn touch(&mut self, field: F) -> Result<(), FormError> {
        self.ensure_registered(std::slice::from_ref(&field))?;
        self.touched.insert(field);
        Ok(())
    }

    pub fn is_touched(&self, field: &F) -> bool {
        self.touched.contains(field)
    }

    /// A field is dirty when its value differs from its default.
    pub fn is_dirty(&self, field: &F) -> bool {
        self.values.get(field) != self.defaults.get(field)
    }

    pub fn dirty_fields(&self) -> Vec<&F> {
        self.values
            .iter()
            .filter(|(f, v)| self.defaults.get(f) != Some(*v))
            .map(|(f, _)| f)
            .collect()
    }

    pub fn defaults(&self) -> &FormValues<F> {
        &self.defaults
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Restore defaults and forget errors, touched state and submit count.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors.clear();
        self.touched.clear();
        self.submit_count = 0;
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    fn ensure_registered(&self, fields: &[F]) -> Result<(), FormError> {
        match fields.iter().find(|f| !self.values.contains(f)) {
            Some(missing) => Err(FormError::UnknownField {
                path: missing.path().to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<F, V> FormEngine<F> for FormState<F, V>
where
    F: FieldPath + 'static,
    V: Validator<F> + 'static,
{
    type Error = FormError;

    fn values(&self) -> &FormValues<F> {
        &self.values
    }

    fn errors(&self) -> &ErrorSet<F> {
        &self.errors
    }

    async fn trigger(&mut self, fields: &[F]) -> Result<bool, FormError> {
        self.ensure_registered(fields)?;

        let found = failures(self.validator.validate(&self.values));
        self.errors.replace_for(fields, &found);

        let valid = !self.errors.any_of(fields);
        debug!(fields = fields.len(), valid, "partial validation");
        Ok(valid)
    }

    async fn handle_submit<T, H>(&mut self, handler: H) -> Result<SubmitOutcome<T>, FormError>
    where
        T: Send + 'static,
        H: FnOnce(&FormValues<F>) -> T + Send + 'static,
    {
        self.submit_count += 1;

        let found = failures(self.validator.validate(&self.values));
        if found.is_empty() {
            self.errors.clear();
            debug!(submit_count = self.submit_count, "submit accepted");
            Ok(SubmitOutcome::Submitted(handler(&self.values)))
        } else {
            debug!(
                submit_count = self.submit_count,
                errors = found.len(),
                "submit rejected"
            );
            self.errors.replace_all(found);
            Ok(SubmitOutcome::Rejected)
        }
    }
}
