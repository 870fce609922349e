//! Field-keyed error set owned by a form engine.

use crate::core::FieldPath;
use crate::validation::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Current validation messages, grouped by field.
///
/// Fields without an entry are considered valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ErrorSet<F: FieldPath> {
    errors: HashMap<F, Vec<String>>,
}

impl<F: FieldPath> Default for ErrorSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldPath> ErrorSet<F> {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Messages for a field, in the order they were reported.
    pub fn get(&self, field: &F) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// First message for a field, which is what most renderers show.
    pub fn first(&self, field: &F) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn has(&self, field: &F) -> bool {
        self.errors.contains_key(field)
    }

    /// True if any of the given fields has an error.
    pub fn any_of(&self, fields: &[F]) -> bool {
        fields.iter().any(|f| self.has(f))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, error: FieldError<F>) {
        self.errors
            .entry(error.field)
            .or_default()
            .push(error.message);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Replace the entries of `fields` with the matching errors from
    /// `errors`. Entries of every other field are left as they were.
    pub fn replace_for(&mut self, fields: &[F], errors: &[FieldError<F>]) {
        for field in fields {
            self.errors.remove(field);
        }
        for error in errors.iter().filter(|e| fields.contains(&e.field)) {
            self.insert(error.clone());
        }
    }

    /// Replace the whole set.
    pub fn replace_all(&mut self, errors: Vec<FieldError<F>>) {
        self.errors.clear();
        for error in errors {
            self.insert(error);
        }
    }

    /// Messages keyed by field path, sorted for stable output.
    pub fn by_path(&self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(f, messages)| (f.path().to_string(), messages.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestField {
        Name,
        Age,
    }

    impl FieldPath for TestField {
        fn path(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Age => "age",
            }
        }
    }

    #[test]
    fn insert_groups_messages_by_field() {
        let mut set = ErrorSet::new();
        set.insert(FieldError::new(TestField::Name, "is required"));
        set.insert(FieldError::new(TestField::Name, "must be at least 2 characters"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.first(&TestField::Name), Some("is required"));
        assert_eq!(set.get(&TestField::Name).unwrap().len(), 2);
        assert!(!set.has(&TestField::Age));
    }

    #[test]
    fn replace_for_only_touches_requested_fields() {
        let mut set = ErrorSet::new();
        set.insert(FieldError::new(TestField::Name, "old"));
        set.insert(FieldError::new(TestField::Age, "kept"));

        let fresh = vec![
            FieldError::new(TestField::Name, "new"),
            FieldError::new(TestField::Age, "ignored"),
        ];
        set.replace_for(&[TestField::Name], &fresh);

        assert_eq!(set.get(&TestField::Name), Some(&["new".to_string()][..]));
        assert_eq!(set.get(&TestField::Age), Some(&["kept".to_string()][..]));
    }

    #[test]
    fn replace_for_clears_fixed_fields() {
        let mut set = ErrorSet::new();
        set.insert(FieldError::new(TestField::Name, "old"));
        set.replace_for(&[TestField::Name], &[]);
        assert!(set.is_empty());
    }

    #[test]
    fn replace_all_drops_previous_entries() {
        let mut set = ErrorSet::new();
        set.insert(FieldError::new(TestField::Name, "old"));
        set.replace_all(vec![FieldError::new(TestField::Age, "too young")]);

        assert!(!set.has(&TestField::Name));
        assert!(set.any_of(&[TestField::Name, TestField::Age]));
    }

    #[test]
    fn by_path_is_sorted() {
        let mut set = ErrorSet::new();
        set.insert(FieldError::new(TestField::Name, "a"));
        set.insert(FieldError::new(TestField::Age, "b"));

        let keys: Vec<String> = set.by_path().into_keys().collect();
        assert_eq!(keys, vec!["age".to_string(), "name".to_string()]);
    }
}
