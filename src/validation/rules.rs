//! Built-in field rules and the `Schema` validator.

use crate::core::{FieldPath, FormValues};
use crate::validation::violations::FieldError;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for whole-form check functions.
pub type FormCheck<F> =
    Box<dyn Fn(&FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> + Send + Sync>;

/// Declarative rule applied to a single field value.
///
/// Only `Required` fails on a missing or `null` value; every other rule
/// treats `null` as "not provided" and passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// Not null, not a blank string, not an empty array
    Required,
    /// String with at least `n` characters
    MinLength(usize),
    /// String with at most `n` characters
    MaxLength(usize),
    /// Number greater than or equal to the bound
    Min(f64),
    /// Number less than or equal to the bound
    Max(f64),
    /// String shaped like `local@domain.tld`
    Email,
}

impl Rule {
    /// Check a value against this rule.
    /// Returns the failure message, or `None` if the value passes.
    pub fn check(&self, value: &Value) -> Option<String> {
        if value.is_null() {
            return matches!(self, Rule::Required).then(|| "is required".to_string());
        }

        match self {
            Rule::Required => match value {
                Value::String(s) if s.trim().is_empty() => Some("is required".to_string()),
                Value::Array(items) if items.is_empty() => Some("is required".to_string()),
                _ => None,
            },
            Rule::MinLength(n) => match value.as_str() {
                Some(s) if s.chars().count() < *n => {
                    Some(format!("must be at least {n} characters"))
                }
                Some(_) => None,
                None => Some("must be a string".to_string()),
            },
            Rule::MaxLength(n) => match value.as_str() {
                Some(s) if s.chars().count() > *n => {
                    Some(format!("must be at most {n} characters"))
                }
                Some(_) => None,
                None => Some("must be a string".to_string()),
            },
            Rule::Min(bound) => match value.as_f64() {
                Some(x) if x < *bound => Some(format!("must be at least {bound}")),
                Some(_) => None,
                None => Some("must be a number".to_string()),
            },
            Rule::Max(bound) => match value.as_f64() {
                Some(x) if x > *bound => Some(format!("must be at most {bound}")),
                Some(_) => None,
                None => Some("must be a number".to_string()),
            },
            Rule::Email => match value.as_str() {
                Some(s) if looks_like_email(s) => None,
                Some(_) => Some("is not a valid email".to_string()),
                None => Some("must be a string".to_string()),
            },
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validator built from per-field rules and whole-form checks.
///
/// Every rule runs on every call; failures are accumulated rather than
/// stopping at the first one.
pub struct Schema<F: FieldPath> {
    pub(crate) rules: Vec<(F, Rule)>,
    pub(crate) checks: Vec<FormCheck<F>>,
}

impl<F: FieldPath> Schema<F> {
    /// Fields that carry at least one rule, in declaration order.
    pub fn fields(&self) -> Vec<&F> {
        let mut fields: Vec<&F> = Vec::new();
        for (field, _) in &self.rules {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Rules declared for a field.
    pub fn rules_for<'a>(&'a self, field: &'a F) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |(f, _)| f == field)
            .map(|(_, rule)| rule)
    }
}

impl<F: FieldPath> Validator<F> for Schema<F> {
    fn validate(&self, values: &FormValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<FieldError<F>>>> = Vec::new();

        for (field, rule) in &self.rules {
            let value = values.get(field).unwrap_or(&Value::Null);
            let check = match rule.check(value) {
                Some(message) => Validation::fail(FieldError::new(field.clone(), message)),
                None => Validation::success(()),
            };
            checks.push(check);
        }

        for check_fn in &self.checks {
            checks.push(check_fn(values));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::builder::SchemaBuilder;
    use serde_json::json;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestField {
        Name,
        Age,
        Email,
        Password,
        Confirm,
    }

    impl FieldPath for TestField {
        fn path(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Age => "age",
                Self::Email => "email",
                Self::Password => "password",
                Self::Confirm => "confirm",
            }
        }
    }

    #[test]
    fn required_rejects_blank_values() {
        assert!(Rule::Required.check(&json!(null)).is_some());
        assert!(Rule::Required.check(&json!("   ")).is_some());
        assert!(Rule::Required.check(&json!([])).is_some());
        assert!(Rule::Required.check(&json!("x")).is_none());
        assert!(Rule::Required.check(&json!(0)).is_none());
    }

    #[test]
    fn optional_rules_pass_on_null() {
        assert!(Rule::MinLength(2).check(&json!(null)).is_none());
        assert!(Rule::Min(1.0).check(&json!(null)).is_none());
        assert!(Rule::Email.check(&json!(null)).is_none());
    }

    #[test]
    fn length_counts_characters() {
        assert!(Rule::MinLength(2).check(&json!("é")).is_some());
        assert!(Rule::MinLength(2).check(&json!("éé")).is_none());
        assert!(Rule::MaxLength(3).check(&json!("abcd")).is_some());
    }

    #[test]
    fn numeric_rules_check_bounds_and_type() {
        assert!(Rule::Min(18.0).check(&json!(17)).is_some());
        assert!(Rule::Min(18.0).check(&json!(18)).is_none());
        assert!(Rule::Max(120.0).check(&json!(120.5)).is_some());
        assert_eq!(
            Rule::Min(0.0).check(&json!("3")),
            Some("must be a number".to_string())
        );
    }

    #[test]
    fn email_rule_accepts_plausible_addresses() {
        assert!(Rule::Email.check(&json!("al@example.com")).is_none());
        assert!(Rule::Email.check(&json!("al@example")).is_some());
        assert!(Rule::Email.check(&json!("@example.com")).is_some());
        assert!(Rule::Email.check(&json!("al@@example.com")).is_some());
        assert!(Rule::Email.check(&json!("a l@example.com")).is_some());
    }

    #[test]
    fn email_rule_rejects_empty_domain_labels() {
        assert!(Rule::Email.check(&json!("al@mail.example.com")).is_none());
        assert!(Rule::Email.check(&json!("a@b..c")).is_some());
        assert!(Rule::Email.check(&json!("a@.b.c")).is_some());
        assert!(Rule::Email.check(&json!("a@b.c.")).is_some());
    }

    #[test]
    fn schema_accumulates_all_failures() {
        let schema = SchemaBuilder::new()
            .rule(TestField::Name, Rule::MinLength(2))
            .rule(TestField::Age, Rule::Min(18.0))
            .rule(TestField::Email, Rule::Email)
            .build();

        let values = FormValues::new()
            .with(TestField::Name, "A")
            .with(TestField::Age, 12)
            .with(TestField::Email, "nope");

        match schema.validate(&values) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.field == TestField::Name));
                assert!(errors.iter().any(|e| e.field == TestField::Age));
                assert!(errors.iter().any(|e| e.field == TestField::Email));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn schema_succeeds_when_all_rules_pass() {
        let schema = SchemaBuilder::new()
            .rule(TestField::Name, Rule::Required)
            .rule(TestField::Name, Rule::MinLength(2))
            .build();

        let values = FormValues::new().with(TestField::Name, "Al");

        assert!(matches!(schema.validate(&values), Validation::Success(_)));
    }

    #[test]
    fn missing_value_is_treated_as_null() {
        let schema = SchemaBuilder::new()
            .rule(TestField::Name, Rule::Required)
            .build();

        let values: FormValues<TestField> = FormValues::new();

        match schema.validate(&values) {
            Validation::Failure(errors) => {
                let error = errors.iter().next().unwrap();
                assert_eq!(error.field, TestField::Name);
                assert_eq!(error.message, "is required");
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn cross_field_checks_run() {
        let schema = SchemaBuilder::new()
            .rule(TestField::Password, Rule::MinLength(8))
            .require_match(TestField::Confirm, TestField::Password, "must match password")
            .build();

        let mismatched = FormValues::new()
            .with(TestField::Password, "hunter22")
            .with(TestField::Confirm, "hunter23");

        match schema.validate(&mismatched) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.iter().next().unwrap().field, TestField::Confirm);
            }
            Validation::Success(_) => panic!("Expected mismatch failure"),
        }

        let matched = FormValues::new()
            .with(TestField::Password, "hunter22")
            .with(TestField::Confirm, "hunter22");
        assert!(matches!(schema.validate(&matched), Validation::Success(_)));
    }

    #[test]
    fn schema_lists_fields_in_declaration_order() {
        let schema = SchemaBuilder::new()
            .rule(TestField::Email, Rule::Required)
            .rule(TestField::Name, Rule::Required)
            .rule(TestField::Email, Rule::Email)
            .build();

        assert_eq!(schema.fields(), vec![&TestField::Email, &TestField::Name]);
        assert_eq!(schema.rules_for(&TestField::Email).count(), 2);
    }
}
