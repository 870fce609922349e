//! The form-state engine seam.

use crate::core::{FieldPath, FormValues};
use crate::form::errors::ErrorSet;
use async_trait::async_trait;

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome<T> {
    /// All fields valid, handler ran and returned this value
    Submitted(T),

    /// Validation failed; the handler did not run and the engine's error
    /// set holds the reasons
    Rejected,
}

/// Stateful capability holding live values and the error set.
///
/// The navigator only ever calls `trigger`. Everything else is passed
/// through to the caller untouched.
#[async_trait]
pub trait FormEngine<F: FieldPath>: Send {
    /// Malfunction of the engine itself (not a validation failure).
    type Error: std::error::Error + Send + Sync + 'static;

    fn values(&self) -> &FormValues<F>;

    fn errors(&self) -> &ErrorSet<F>;

    /// Validate and update the errors of exactly `fields`.
    ///
    /// Returns `Ok(true)` when none of the requested fields has an error.
    async fn trigger(&mut self, fields: &[F]) -> Result<bool, Self::Error>;

    /// Validate every field and run `handler` on success.
    async fn handle_submit<T, H>(&mut self, handler: H) -> Result<SubmitOutcome<T>, Self::Error>
    where
        T: Send + 'static,
        H: FnOnce(&FormValues<F>) -> T + Send + 'static;
}
