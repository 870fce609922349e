//! Builder API for declaring a `Schema`.

use crate::core::{FieldPath, FormValues};
use crate::validation::rules::{FormCheck, Rule, Schema};
use crate::validation::violations::FieldError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for schema validators.
///
/// # Example
///
/// ```rust
/// use formstep::field_enum;
/// use formstep::validation::{Rule, SchemaBuilder, Validator};
/// use formstep::core::FormValues;
/// use stillwater::validation::Validation;
///
/// field_enum! {
///     enum Field {
///         Name => "name",
///     }
/// }
///
/// let schema = SchemaBuilder::new()
///     .rule(Field::Name, Rule::MinLength(2))
///     .build();
///
/// let values = FormValues::new().with(Field::Name, "Al");
/// assert!(matches!(schema.validate(&values), Validation::Success(_)));
/// ```
pub struct SchemaBuilder<F: FieldPath> {
    rules: Vec<(F, Rule)>,
    checks: Vec<FormCheck<F>>,
}

impl<F: FieldPath + 'static> SchemaBuilder<F> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Add a rule for a field
    pub fn rule(mut self, field: F, rule: Rule) -> Self {
        self.rules.push((field, rule));
        self
    }

    /// Add several rules for one field
    pub fn rules(mut self, field: F, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules
            .extend(rules.into_iter().map(|rule| (field.clone(), rule)));
        self
    }

    /// Add a whole-form check
    pub fn require<C>(mut self, check: C) -> Self
    where
        C: Fn(&FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>>
            + Send
            + Sync
            + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate over the whole form, reported against `field`
    pub fn require_pred<P>(mut self, field: F, predicate: P, error_msg: impl Into<String>) -> Self
    where
        P: Fn(&FormValues<F>) -> bool + Send + Sync + 'static,
    {
        let error_msg = error_msg.into();
        let check = move |values: &FormValues<F>| {
            if predicate(values) {
                Validation::success(())
            } else {
                Validation::fail(FieldError::new(field.clone(), error_msg.clone()))
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Require `field` to hold the same value as `other`
    pub fn require_match(self, field: F, other: F, error_msg: impl Into<String>) -> Self {
        let (a, b) = (field.clone(), other);
        self.require_pred(field, move |values| values.get(&a) == values.get(&b), error_msg)
    }

    pub fn build(self) -> Schema<F> {
        Schema {
            rules: self.rules,
            checks: self.checks,
        }
    }
}

impl<F: FieldPath + 'static> Default for SchemaBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
