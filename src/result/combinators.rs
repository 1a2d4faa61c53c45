//! Combinators for composing fallible operations.
//!
//! Every combinator is pure: it consumes the receiver, produces a new
//! result, and leaves the untouched side exactly as it was (the error or
//! value is moved, never copied or rebuilt).

use std::future::Future;

use super::operation_result::OperationResult;

impl<E, V> OperationResult<E, V> {
    /// Transforms the success value, preserving the error type.
    ///
    /// A failure passes through with its error untouched.
    pub fn map<U, F>(self, transform: F) -> OperationResult<E, U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => OperationResult::Success(transform(value)),
            Self::Failure(error) => OperationResult::Failure(error),
        }
    }

    /// Transforms the error, preserving the success type.
    ///
    /// A success passes through with its value untouched.
    pub fn map_err<F, T>(self, transform: T) -> OperationResult<F, V>
    where
        T: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(transform(error)),
        }
    }

    /// Sequences a dependent fallible step.
    ///
    /// A failure short-circuits: `transform` is never invoked.
    pub fn and_then<U, F>(self, transform: F) -> OperationResult<E, U>
    where
        F: FnOnce(V) -> OperationResult<E, U>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => OperationResult::Failure(error),
        }
    }

    /// Converts a failure into a success using the recovery function.
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(recovery(error)),
        }
    }

    /// Converts a failure into a new result, which may itself be a failure.
    pub fn recover_with<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Keeps a success only if `predicate` holds, otherwise demotes it to
    /// `Failure(fallback())`. Failures pass through unchanged.
    pub fn filter_or_else<P, F>(self, predicate: P, fallback: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(_) => Self::Failure(fallback()),
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// The asynchronous analogue of [`OperationResult::and_then`].
    ///
    /// A failure short-circuits: `transform` is never invoked, so no future
    /// is constructed or awaited.
    pub async fn and_then_async<U, F, Fut>(self, transform: F) -> OperationResult<E, U>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = OperationResult<E, U>>,
    {
        match self {
            Self::Success(value) => transform(value).await,
            Self::Failure(error) => OperationResult::Failure(error),
        }
    }
}

/// Collapses a sequence of results into one result of the ordered values.
///
/// Scans left to right and returns the first failure encountered, dropping
/// any earlier successes; later entries are never inspected. If every entry
/// succeeds, the values come back in their original order.
pub fn combine<E, V, I>(results: I) -> OperationResult<E, Vec<V>>
where
    I: IntoIterator<Item = OperationResult<E, V>>,
{
    let results = results.into_iter();
    let mut values = Vec::with_capacity(results.size_hint().0);
    for result in results {
        match result {
            OperationResult::Success(value) => values.push(value),
            OperationResult::Failure(error) => return OperationResult::Failure(error),
        }
    }
    OperationResult::Success(values)
}
