//! Macros for declaring form field sets.

/// Declare a closed field enum and implement `FieldPath` for it.
///
/// Each variant maps to its dotted path. The enum also gets an `ALL`
/// constant listing every field in declaration order, and serializes as
/// its path.
///
/// # Example
///
/// ```
/// use formstep::core::FieldPath;
/// use formstep::field_enum;
///
/// field_enum! {
///     pub enum SignupField {
///         Name => "name",
///         Email => "contact.email",
///     }
/// }
///
/// assert_eq!(SignupField::Email.path(), "contact.email");
/// assert_eq!(SignupField::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $path:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $path)]
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every field, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::FieldPath for $name {
            fn path(&self) -> &str {
                match self {
                    $(Self::$variant => $path),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::FieldPath;

    field_enum! {
        enum TestField {
            Name => "name",
            City => "address.city",
        }
    }

    #[test]
    fn field_enum_macro_generates_trait() {
        assert_eq!(TestField::Name.path(), "name");
        assert_eq!(TestField::City.path(), "address.city");
    }

    #[test]
    fn all_lists_fields_in_order() {
        assert_eq!(TestField::ALL, &[TestField::Name, TestField::City]);
    }

    #[test]
    fn serializes_as_path() {
        let json = serde_json::to_string(&TestField::City).unwrap();
        assert_eq!(json, "\"address.city\"");

        let back: TestField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestField::City);
    }

    #[test]
    fn field_enum_supports_visibility() {
        field_enum! {
            pub enum PublicField {
                A => "a",
            }
        }

        assert_eq!(PublicField::A.path(), "a");
    }
}
