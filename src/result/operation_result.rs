//! The two-variant operation result container.

use crate::error::ErrorMessage;

/// Either a successful operation with its value or a failed operation with
/// its error.
///
/// The variant is fixed at construction: combinators return new values and
/// never mutate the receiver. No operation on this type panics or raises;
/// failure always travels in-band as [`OperationResult::Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationResult<E, V> {
    /// The operation completed with a value.
    Success(V),
    /// The operation failed with an error.
    Failure(E),
}

impl<E, V> OperationResult<E, V> {
    /// Returns true if this result represents a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Reduces the result to a single value by handling both variants.
    ///
    /// This is the total pattern match: there is no default branch, both
    /// sides must be handled.
    pub fn fold<T, FE, FV>(self, on_failure: FE, on_success: FV) -> T
    where
        FE: FnOnce(E) -> T,
        FV: FnOnce(V) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, or `None` if this is a failure.
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error, or `None` if this is a success.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a `std::result::Result`, for call sites that want `?`
    /// or the std combinators.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Borrows both sides, producing a result of references.
    pub fn as_ref(&self) -> OperationResult<&E, &V> {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(error),
        }
    }

    /// Returns the success value or the supplied fallback.
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or a fallback computed from the error.
    pub fn unwrap_or_else<F>(self, default: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(error),
        }
    }

    /// Calls `action` with the success value, returning the result unchanged.
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the error, returning the result unchanged.
    pub fn inspect_err<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }
}

impl<E: ErrorMessage, V> OperationResult<E, V> {
    /// Returns the failure's message, or `None` for a success.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestError(String);

    impl ErrorMessage for TestError {
        fn message(&self) -> &str {
            &self.0
        }
    }

    fn failure(text: &str) -> OperationResult<TestError, u32> {
        OperationResult::Failure(TestError(text.to_string()))
    }

    #[test]
    fn test_success_projections() {
        let result: OperationResult<TestError, u32> = OperationResult::Success(7);
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.clone().ok(), Some(7));
        assert_eq!(result.err(), None);
    }

    #[test]
    fn test_failure_projections() {
        let result = failure("boom");
        assert!(result.is_failure());
        assert!(!result.is_success());
        assert_eq!(result.clone().err(), Some(TestError("boom".to_string())));
        assert_eq!(result.ok(), None);
    }

    #[test]
    fn test_fold_is_total() {
        let success: OperationResult<TestError, u32> = OperationResult::Success(2);
        assert_eq!(success.fold(|_| "failure", |_| "success"), "success");
        assert_eq!(failure("x").fold(|_| "failure", |_| "success"), "failure");
    }

    #[test]
    fn test_unwrap_or_variants() {
        let success: OperationResult<TestError, u32> = OperationResult::Success(5);
        assert_eq!(success.unwrap_or(0), 5);
        assert_eq!(failure("gone").unwrap_or(9), 9);
        assert_eq!(
            failure("gone").unwrap_or_else(|error| error.0.len() as u32),
            4
        );
    }

    #[test]
    fn test_inspect_passes_through_unchanged() {
        let mut seen = None;
        let result: OperationResult<TestError, u32> = OperationResult::Success(3);
        let result = result.inspect(|value| seen = Some(*value));
        assert_eq!(seen, Some(3));
        assert_eq!(result, OperationResult::Success(3));

        let mut observed = None;
        let result = failure("bad").inspect_err(|error| observed = Some(error.clone()));
        assert_eq!(observed, Some(TestError("bad".to_string())));
        assert_eq!(result, failure("bad"));
    }

    #[test]
    fn test_inspect_err_skips_success() {
        let mut called = false;
        let result: OperationResult<TestError, u32> = OperationResult::Success(1);
        let _ = result.inspect_err(|_| called = true);
        assert!(!called);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure("no route").failure_message(), Some("no route"));
        let success: OperationResult<TestError, u32> = OperationResult::Success(1);
        assert_eq!(success.failure_message(), None);
    }

    #[test]
    fn test_as_ref_borrows_both_sides() {
        let success: OperationResult<TestError, u32> = OperationResult::Success(4);
        assert_eq!(success.as_ref().ok(), Some(&4));
        let error = failure("denied");
        assert_eq!(
            error.as_ref().err().map(|e| e.message()),
            Some("denied")
        );
    }
}
