//! Form value set keyed by field path.

use super::field::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Current (or initial) values of a form, one JSON value per field.
///
/// # Example
///
/// ```rust
/// use formstep::core::FormValues;
/// use formstep::field_enum;
/// use serde_json::json;
///
/// field_enum! {
///     enum Field {
///         Name => "name",
///         Age => "age",
///     }
/// }
///
/// let values = FormValues::new()
///     .with(Field::Name, json!(""))
///     .with(Field::Age, json!(0));
///
/// assert_eq!(values.get(&Field::Age), Some(&json!(0)));
/// assert!(values.contains(&Field::Name));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FormValues<F: FieldPath> {
    values: HashMap<F, Value>,
}

impl<F: FieldPath> Default for FormValues<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldPath> FormValues<F> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, field: F, value: impl Into<Value>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, field: F, value: Value) -> Option<Value> {
        self.values.insert(field, value)
    }

    pub fn get(&self, field: &F) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &F) -> bool {
        self.values.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as a JSON object keyed by field path.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(f, v)| (f.path().to_string(), v.clone()))
                .collect(),
        )
    }
}

impl<F: FieldPath> FromIterator<(F, Value)> for FormValues<F> {
    fn from_iter<I: IntoIterator<Item = (F, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
