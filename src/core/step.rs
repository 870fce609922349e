//! A single entry of the step sequence.

use super::field::FieldPath;

/// One unit of the form sequence: a renderable plus the fields it validates.
///
/// The renderable is opaque; nothing in this crate looks inside it. The
/// field list is only used to scope partial validation when advancing.
///
/// # Example
///
/// ```rust
/// use formstep::core::Step;
/// use formstep::field_enum;
///
/// field_enum! {
///     enum Field {
///         Name => "name",
///         Age => "age",
///     }
/// }
///
/// let step = Step::new("profile", vec![Field::Name, Field::Age]);
/// assert_eq!(step.renderable(), &"profile");
/// assert!(step.contains(&Field::Age));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Step<F: FieldPath, R> {
    renderable: R,
    fields: Vec<F>,
}

impl<F: FieldPath, R> Step<F, R> {
    /// Create a step from its renderable and ordered field list.
    ///
    /// Duplicate fields are reported by the form builder, not here.
    pub fn new(renderable: R, fields: Vec<F>) -> Self {
        Self { renderable, fields }
    }

    pub fn renderable(&self) -> &R {
        &self.renderable
    }

    /// Fields validated before leaving this step, in declaration order.
    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    pub fn contains(&self, field: &F) -> bool {
        self.fields.contains(field)
    }

    /// First field that appears more than once, if any.
    pub(crate) fn duplicate_field(&self) -> Option<&F> {
        self.fields
            .iter()
            .enumerate()
            .find(|(i, f)| self.fields[..*i].contains(f))
            .map(|(_, f)| f)
    }
}
