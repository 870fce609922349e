//! Field path trait for form value identifiers.
//!
//! Every form declares a closed set of field paths. Implementing the trait
//! for an enum keeps "step fields must be valid schema paths" a compile-time
//! property instead of a string lookup that can fail at runtime.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for identifiers locating one value in a form.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: paths key the value map and the error set
/// - `Debug`: paths must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: paths appear in snapshots handed to renderers
///
/// # Example
///
/// ```rust
/// use formstep::core::FieldPath;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum ProfileField {
///     Name,
///     Age,
/// }
///
/// impl FieldPath for ProfileField {
///     fn path(&self) -> &str {
///         match self {
///             Self::Name => "name",
///             Self::Age => "age",
///         }
///     }
/// }
///
/// assert_eq!(ProfileField::Age.path(), "age");
/// ```
pub trait FieldPath:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the dotted path of this field, used for display and snapshots.
    fn path(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestField {
        Name,
        Email,
        AddressCity,
    }

    impl FieldPath for TestField {
        fn path(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Email => "email",
                Self::AddressCity => "address.city",
            }
        }
    }

    #[test]
    fn path_returns_declared_value() {
        assert_eq!(TestField::Name.path(), "name");
        assert_eq!(TestField::Email.path(), "email");
        assert_eq!(TestField::AddressCity.path(), "address.city");
    }

    #[test]
    fn field_paths_are_hashable() {
        let set: HashSet<TestField> = [TestField::Name, TestField::Name, TestField::Email]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn field_path_serializes_correctly() {
        let json = serde_json::to_string(&TestField::AddressCity).unwrap();
        let deserialized: TestField = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestField::AddressCity);
    }
}
