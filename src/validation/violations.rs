//! Field-level validation failures.

use crate::core::FieldPath;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed check on one field.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
#[error("{}: {}", .field.path(), .message)]
pub struct FieldError<F: FieldPath> {
    pub field: F,
    pub message: String,
}

impl<F: FieldPath> FieldError<F> {
    pub fn new(field: F, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestField {
        Email,
    }

    impl FieldPath for TestField {
        fn path(&self) -> &str {
            "email"
        }
    }

    #[test]
    fn display_includes_path_and_message() {
        let error = FieldError::new(TestField::Email, "is not a valid email");
        assert_eq!(error.to_string(), "email: is not a valid email");
    }
}
